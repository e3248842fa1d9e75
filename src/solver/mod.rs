//! Quordle solving algorithms
//!
//! Information-gain ranking plus the exact expected-plays search over the
//! joint state of up to four boards.

pub mod config;
pub mod entropy;
mod moves;
mod quad;
mod search;

pub use config::{RecommendConfig, SearchMode, SolverConfig};
pub use moves::PossibleMove;
pub use quad::{MAX_BOARDS, QuadState};
pub use search::{SearchStats, Solution, Solver};
