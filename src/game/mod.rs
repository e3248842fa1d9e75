//! Game driver: history replay and the daily puzzle generator

mod board;
pub mod daily;
mod replay;

pub use board::Board;
pub use daily::{DailyPuzzle, MersenneTwister};
pub use replay::{GameReplay, HistoryEntry, ReplayStep, SOLVED_MARKER};
