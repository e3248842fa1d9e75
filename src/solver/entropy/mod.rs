//! Entropy-based guess evaluation
//!
//! Information gain is the cheap pre-filter for the expected-plays search and
//! the whole story once the candidate space is too large to search.

mod calculator;
mod ranking;

pub use calculator::{
    GuessMetrics, calculate_metrics, information_gain, outcome_counts, pair_information_gain,
    shannon_entropy, total_information_gain,
};
pub use ranking::{RankedGuess, rank_by_information_gain, select_best_guess};
