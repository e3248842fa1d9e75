//! Command implementations

pub mod analyze;
pub mod daily;
pub mod openings;
pub mod recommend;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_word};
pub use daily::{DailyAnswers, daily_answers, find_next_appearance};
pub use openings::{OpeningReport, PairReport, opening_pair, rank_openings};
pub use recommend::{Recommendation, recommend, replay_history, replay_with_answers};
pub use simulate::{SimulationConfig, SimulationReport, run_simulation};
