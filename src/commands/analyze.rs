//! Guess analysis command
//!
//! Shows how a guess splits the whole solution vocabulary into outcome groups.

use crate::core::{Outcome, Word};
use crate::matrix::OutcomeMatrix;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Largest group size reported in the size histogram
pub const HISTOGRAM_LIMIT: usize = 10;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Outcome groups of one or two words
    pub small_groups: Vec<(Outcome, Vec<Word>)>,
    /// Group size to number of words in groups of that size
    pub size_histogram: Vec<(usize, usize)>,
}

/// Analyze a guess against every solution
///
/// # Errors
///
/// Returns an error if the word is invalid or not guessable.
pub fn analyze_word(matrix: &OutcomeMatrix, word: &str) -> Result<AnalysisResult> {
    let guess = matrix
        .guess_index(word)
        .with_context(|| format!("cannot analyze {word}"))?;
    let candidates = matrix.all_solutions();
    let groups = matrix.partition(&candidates, guess);

    let mut small_groups: Vec<(Outcome, Vec<Word>)> = groups
        .iter()
        .filter(|(_, members)| members.len() <= 2)
        .map(|(outcome, members)| {
            let words = members
                .iter()
                .map(|&s| matrix.solution_word(s).clone())
                .collect();
            (*outcome, words)
        })
        .collect();
    small_groups.sort_by_key(|(outcome, words)| (words.len(), *outcome));

    let mut by_size: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, members) in &groups {
        *by_size.entry(members.len()).or_insert(0) += members.len();
    }
    let size_histogram = by_size
        .into_iter()
        .take_while(|&(size, _)| size <= HISTOGRAM_LIMIT)
        .collect();

    Ok(AnalysisResult {
        word: matrix.guess_word(guess).clone(),
        metrics: calculate_metrics(matrix, &candidates, guess),
        total_candidates: candidates.len(),
        small_groups,
        size_histogram,
    })
}
