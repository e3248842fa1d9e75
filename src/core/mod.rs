//! Core domain types for Quordle
//!
//! Words and the outcome codec. Everything here is pure and cheap to copy around.

mod outcome;
mod word;

pub use outcome::{Mark, Outcome};
pub use word::{WORD_LENGTH, Word, WordError};
