//! Shannon entropy over outcome distributions
//!
//! Given a guess and a candidate set, computes the expected information gain.

use crate::core::Outcome;
use crate::matrix::OutcomeMatrix;
use rustc_hash::FxHashMap;

/// Summary of how a guess splits a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub information_gain: f64,
    /// Expected number of candidates left after the guess
    pub expected_remaining: f64,
    /// Largest outcome group (worst case)
    pub max_group: usize,
    /// Number of distinct outcomes
    pub group_count: usize,
}

/// Expected information gain of playing `guess` against `candidates`
///
/// # Formula
/// gain = log₂(n) − Σ nᵢ·log₂(nᵢ) / n
///
/// where nᵢ is the number of candidates producing outcome i. This equals the
/// Shannon entropy of the outcome distribution, which is how it is computed.
/// A set of zero or one candidates has nothing left to learn and scores 0.
///
/// # Examples
/// ```
/// use quordle_solver::matrix::matrix_from_strs;
/// use quordle_solver::solver::entropy::information_gain;
///
/// let words = ["BERET", "EGRET", "ETHER", "EXERT"];
/// let matrix = matrix_from_strs(&words, &words).unwrap();
/// let beret = matrix.guess_index("BERET").unwrap();
///
/// // BERET tells all four apart: log2(4) = 2 bits
/// let gain = information_gain(&matrix, &matrix.all_solutions(), beret);
/// assert!((gain - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn information_gain(matrix: &OutcomeMatrix, candidates: &[usize], guess: usize) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }
    shannon_entropy(&outcome_counts(matrix, candidates, guess))
}

/// Information gain summed over independent boards
#[must_use]
pub fn total_information_gain(matrix: &OutcomeMatrix, boards: &[Vec<usize>], guess: usize) -> f64 {
    boards
        .iter()
        .map(|candidates| information_gain(matrix, candidates, guess))
        .sum()
}

/// Information gained by playing `first` then `second` against one board
///
/// Candidates are keyed on the pair of outcomes, so the result is at most
/// log₂(n) and never less than either single-guess gain.
#[must_use]
pub fn pair_information_gain(
    matrix: &OutcomeMatrix,
    candidates: &[usize],
    first: usize,
    second: usize,
) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let mut counts: FxHashMap<(Outcome, Outcome), usize> = FxHashMap::default();
    for &solution in candidates {
        let key = (matrix.lookup(solution, first), matrix.lookup(solution, second));
        *counts.entry(key).or_insert(0) += 1;
    }

    shannon_entropy(&counts)
}

/// Count candidates by the outcome they produce with the guess
#[must_use]
pub fn outcome_counts(
    matrix: &OutcomeMatrix,
    candidates: &[usize],
    guess: usize,
) -> FxHashMap<Outcome, usize> {
    let mut counts = FxHashMap::default();

    for &solution in candidates {
        *counts.entry(matrix.lookup(solution, guess)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from an outcome distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one key with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(k)] for k keys
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate gain, expected remaining size and worst case for a guess
#[must_use]
pub fn calculate_metrics(matrix: &OutcomeMatrix, candidates: &[usize], guess: usize) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            information_gain: 0.0,
            expected_remaining: 0.0,
            max_group: 0,
            group_count: 0,
        };
    }

    let counts = outcome_counts(matrix, candidates, guess);
    let total = candidates.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&n| {
            let n = n as f64;
            n * n / total
        })
        .sum();

    GuessMetrics {
        information_gain: information_gain(matrix, candidates, guess),
        expected_remaining,
        max_group: counts.values().copied().max().unwrap_or(0),
        group_count: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_from_strs;

    const WORDS: &[&str] = &["BERET", "BERTH", "EGRET", "ETHER", "EXERT", "CATTY", "ZZZZZ"];

    fn setup() -> OutcomeMatrix {
        matrix_from_strs(WORDS, WORDS).unwrap()
    }

    fn indices(matrix: &OutcomeMatrix, words: &[&str]) -> Vec<usize> {
        words
            .iter()
            .map(|w| matrix.solution_index(w).unwrap())
            .collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        for code in 0..4u16 {
            counts.insert(code, 1);
        }
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Outcome::ALL_ABSENT, 10);
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Outcome, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn gain_matches_log_formula() {
        let m = setup();
        let candidates = indices(&m, &["BERET", "BERTH", "EGRET", "ETHER", "EXERT"]);
        let catty = m.guess_index("CATTY").unwrap();

        // CATTY splits 4/1
        let n = 5.0f64;
        let expected = n.log2() - (4.0 * 4.0f64.log2() + 0.0) / n;
        let gain = information_gain(&m, &candidates, catty);
        assert!((gain - expected).abs() < 1e-12);
    }

    #[test]
    fn gain_is_zero_for_tiny_sets() {
        let m = setup();
        let beret = m.guess_index("BERET").unwrap();
        assert!(information_gain(&m, &[], beret).abs() < f64::EPSILON);
        let single = indices(&m, &["EGRET"]);
        assert!(information_gain(&m, &single, beret).abs() < f64::EPSILON);
    }

    #[test]
    fn gain_is_zero_for_single_group() {
        let m = setup();
        let zzzzz = m.guess_index("ZZZZZ").unwrap();
        let candidates = indices(&m, &["BERET", "EGRET", "ETHER"]);
        assert!(information_gain(&m, &candidates, zzzzz).abs() < f64::EPSILON);
    }

    #[test]
    fn gain_is_never_negative() {
        let m = setup();
        let all = m.all_solutions();
        for guess in m.all_guesses() {
            for len in 1..=all.len() {
                assert!(information_gain(&m, &all[..len], guess) >= 0.0);
            }
        }
    }

    #[test]
    fn total_gain_sums_boards() {
        let m = setup();
        let beret = m.guess_index("BERET").unwrap();
        let a = indices(&m, &["BERET", "EGRET"]);
        let b = indices(&m, &["ETHER", "EXERT", "CATTY"]);
        let total = total_information_gain(&m, &[a.clone(), b.clone()], beret);
        let separate = information_gain(&m, &a, beret) + information_gain(&m, &b, beret);
        assert!((total - separate).abs() < 1e-12);
    }

    #[test]
    fn pair_gain_bounds() {
        let m = setup();
        let all = indices(&m, &["BERET", "BERTH", "EGRET", "ETHER", "EXERT", "CATTY"]);
        let catty = m.guess_index("CATTY").unwrap();
        let zzzzz = m.guess_index("ZZZZZ").unwrap();
        let beret = m.guess_index("BERET").unwrap();

        let single = information_gain(&m, &all, catty);
        let useless_pair = pair_information_gain(&m, &all, catty, zzzzz);
        assert!((single - useless_pair).abs() < 1e-12);

        let pair = pair_information_gain(&m, &all, catty, beret);
        assert!(pair >= information_gain(&m, &all, beret) - 1e-12);
        assert!(pair <= (all.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn metrics_for_perfect_split() {
        let m = setup();
        let beret = m.guess_index("BERET").unwrap();
        let candidates = indices(&m, &["BERET", "BERTH", "EGRET", "ETHER", "EXERT"]);
        let metrics = calculate_metrics(&m, &candidates, beret);
        assert_eq!(metrics.group_count, 5);
        assert_eq!(metrics.max_group, 1);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-12);
        assert!((metrics.information_gain - 5.0f64.log2()).abs() < 1e-12);
    }
}
