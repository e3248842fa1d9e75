//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_daily, print_history, print_next_appearance, print_openings,
    print_pair, print_recommendation, print_replay, print_search_stats, print_simulation,
};
