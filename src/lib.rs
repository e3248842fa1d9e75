//! Quordle Solver
//!
//! Optimal-play search for Quordle: four Wordle boards solved at once, every
//! guess scored against all four. Finds the guess minimising the expected
//! number of further guesses, falling back to information gain when the
//! answer space is too large to search.
//!
//! # Quick Start
//!
//! ```rust
//! use quordle_solver::matrix::matrix_from_strs;
//! use quordle_solver::solver::{QuadState, Solver, SolverConfig};
//!
//! let words = ["BERET", "BERTH", "EGRET", "ETHER", "EXERT", "MIMIC", "PUFFY", "SPUNK"];
//! let matrix = matrix_from_strs(&words, &words).unwrap();
//! let state = QuadState::from_words(
//!     &matrix,
//!     &[&["BERET", "BERTH", "EGRET", "ETHER", "EXERT"], &["MIMIC"], &["PUFFY"], &["SPUNK"]],
//! )
//! .unwrap();
//!
//! let solution = Solver::new(&matrix, SolverConfig::default()).solve(&state).unwrap();
//! assert!((solution.expected_plays - 4.8).abs() < 1e-9);
//! assert_eq!(solution.word(&matrix).unwrap().text(), "MIMIC");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Outcome lookup table
pub mod matrix;

// Solving algorithms
pub mod solver;

// Game replay and daily puzzles
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
