//! Opening guess ranking
//!
//! Scores every guessable word by information gain against the full solution
//! vocabulary, which is the same for all four boards at the start of a game.

use crate::matrix::OutcomeMatrix;
use crate::solver::entropy::{
    RankedGuess, information_gain, pair_information_gain, rank_by_information_gain,
};
use anyhow::{Context, Result};

/// Best and worst openings
#[derive(Debug, Clone)]
pub struct OpeningReport {
    pub best: Vec<RankedGuess>,
    pub worst: Vec<RankedGuess>,
    pub total_guesses: usize,
}

/// Information gained by a two-word opening on one board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairReport {
    pub first: usize,
    pub second: usize,
    pub first_gain: f64,
    pub pair_gain: f64,
}

/// Rank all guesses as openings, keeping `top` from each end
#[must_use]
pub fn rank_openings(matrix: &OutcomeMatrix, top: usize) -> OpeningReport {
    let boards = vec![matrix.all_solutions()];
    let ranked = rank_by_information_gain(matrix, &boards, &matrix.all_guesses(), None);

    let worst = ranked.iter().rev().take(top).copied().collect();
    let best = ranked.iter().take(top).copied().collect();

    OpeningReport {
        best,
        worst,
        total_guesses: ranked.len(),
    }
}

/// Gain of playing `first` then `second` against a fresh board
///
/// # Errors
///
/// Returns an error if either word is not guessable.
pub fn opening_pair(matrix: &OutcomeMatrix, first: &str, second: &str) -> Result<PairReport> {
    let index = |word: &str| {
        matrix
            .guess_index(word)
            .with_context(|| format!("unknown opening {word}"))
    };
    let first = index(first)?;
    let second = index(second)?;
    let candidates = matrix.all_solutions();

    Ok(PairReport {
        first,
        second,
        first_gain: information_gain(matrix, &candidates, first),
        pair_gain: pair_information_gain(matrix, &candidates, first, second),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_from_strs;

    const SOLUTIONS: &[&str] = &["BERET", "BERTH", "CATTY", "EGRET", "ETHER", "EXERT"];
    const GUESSES: &[&str] = &["BERET", "BERTH", "CATTY", "EGRET", "ETHER", "EXERT", "ZZZZZ"];

    #[test]
    fn best_and_worst_openings() {
        let m = matrix_from_strs(SOLUTIONS, GUESSES).unwrap();
        let report = rank_openings(&m, 2);

        assert_eq!(report.total_guesses, 7);
        assert_eq!(report.best.len(), 2);
        assert_eq!(m.guess_word(report.best[0].guess).text(), "BERET");
        assert_eq!(m.guess_word(report.worst[0].guess).text(), "ZZZZZ");
        assert!(report.best[0].information_gain > report.worst[0].information_gain);
    }

    #[test]
    fn pair_gain_is_at_least_first_gain() {
        let m = matrix_from_strs(SOLUTIONS, GUESSES).unwrap();
        let pair = opening_pair(&m, "CATTY", "ETHER").unwrap();
        assert!(pair.pair_gain >= pair.first_gain);
        assert!(pair.pair_gain <= 6f64.log2() + 1e-12);

        assert!(opening_pair(&m, "CATTY", "QUAKE").is_err());
    }
}
