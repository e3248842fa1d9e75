//! Guess ranking by information gain
//!
//! Each guess is scored independently against the shared matrix, so the pool
//! is split across rayon workers and merged afterwards.

use super::calculator::total_information_gain;
use crate::matrix::OutcomeMatrix;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A guess and its summed information gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub guess: usize,
    pub information_gain: f64,
}

impl RankedGuess {
    /// Highest gain first, lower guess index on ties
    #[must_use]
    pub fn by_gain_desc(a: &Self, b: &Self) -> Ordering {
        b.information_gain
            .total_cmp(&a.information_gain)
            .then(a.guess.cmp(&b.guess))
    }
}

/// Rank `pool` by information gain summed over `boards`, best first
///
/// Returns at most `limit` entries (all of them when `limit` is `None`).
///
/// # Examples
/// ```
/// use quordle_solver::matrix::matrix_from_strs;
/// use quordle_solver::solver::entropy::rank_by_information_gain;
///
/// let words = ["BERET", "EGRET", "ZZZZZ"];
/// let matrix = matrix_from_strs(&words, &words).unwrap();
/// let boards = vec![vec![0, 1]];
///
/// let ranked = rank_by_information_gain(&matrix, &boards, &matrix.all_guesses(), Some(1));
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(matrix.guess_word(ranked[0].guess).text(), "BERET");
/// ```
#[must_use]
pub fn rank_by_information_gain(
    matrix: &OutcomeMatrix,
    boards: &[Vec<usize>],
    pool: &[usize],
    limit: Option<usize>,
) -> Vec<RankedGuess> {
    let mut ranked: Vec<RankedGuess> = pool
        .par_iter()
        .map(|&guess| RankedGuess {
            guess,
            information_gain: total_information_gain(matrix, boards, guess),
        })
        .collect();

    ranked.par_sort_unstable_by(RankedGuess::by_gain_desc);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// The single best guess by information gain, or `None` for an empty pool
#[must_use]
pub fn select_best_guess(
    matrix: &OutcomeMatrix,
    boards: &[Vec<usize>],
    pool: &[usize],
) -> Option<RankedGuess> {
    pool.iter()
        .map(|&guess| RankedGuess {
            guess,
            information_gain: total_information_gain(matrix, boards, guess),
        })
        .min_by(RankedGuess::by_gain_desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_from_strs;

    const WORDS: &[&str] = &["BERET", "BERTH", "EGRET", "ETHER", "EXERT", "CATTY", "ZZZZZ"];

    #[test]
    fn ranking_is_sorted_and_complete() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let boards = vec![m.all_solutions()];
        let ranked = rank_by_information_gain(&m, &boards, &m.all_guesses(), None);

        assert_eq!(ranked.len(), WORDS.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].information_gain >= pair[1].information_gain);
        }
    }

    #[test]
    fn limit_truncates() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let boards = vec![m.all_solutions()];
        let ranked = rank_by_information_gain(&m, &boards, &m.all_guesses(), Some(3));
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn ties_resolved_by_index() {
        // A single-candidate board gives every guess zero gain
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let boards = vec![vec![m.solution_index("BERET").unwrap()]];
        let ranked = rank_by_information_gain(&m, &boards, &[4, 2, 6], None);
        let order: Vec<usize> = ranked.iter().map(|r| r.guess).collect();
        assert_eq!(order, vec![2, 4, 6]);
    }

    #[test]
    fn select_best_matches_ranking_head() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let boards = vec![m.all_solutions(), vec![0, 5]];
        let pool = m.all_guesses();
        let ranked = rank_by_information_gain(&m, &boards, &pool, Some(1));
        let best = select_best_guess(&m, &boards, &pool).unwrap();
        assert_eq!(best, ranked[0]);
    }

    #[test]
    fn select_best_empty_pool() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        assert!(select_best_guess(&m, &[m.all_solutions()], &[]).is_none());
    }
}
