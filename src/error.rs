//! Crate-wide error type

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the codec, the outcome matrix, the solver and the game driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),

    /// A base-4 digit of 3 appeared in an outcome code
    #[error("outcome code {code} has an invalid digit in slot {slot}")]
    InvalidOutcomeDigit { code: u16, slot: usize },

    #[error("outcome code {0} is out of range (must be below 1024)")]
    OutcomeOutOfRange(u16),

    #[error("invalid outcome string {0:?} (expected five of g/y/.)")]
    InvalidOutcomeString(String),

    #[error("board {0} has no remaining candidates")]
    EmptyBoard(usize),

    #[error("{0} boards exceeds the supported maximum of 4")]
    TooManyBoards(usize),

    #[error("word {0} is not in the solution vocabulary")]
    UnknownSolution(String),

    #[error("word {0} is not in the guessable vocabulary")]
    UnknownGuess(String),

    #[error("solution index {index} is out of range for {count} solutions")]
    SolutionIndexOutOfRange { index: usize, count: usize },

    #[error("guess index {index} is out of range for {count} guesses")]
    GuessIndexOutOfRange { index: usize, count: usize },

    #[error("word {0} appears more than once in a vocabulary")]
    DuplicateWord(String),

    #[error("history entry for {guess} has {found} outcomes, expected {expected}")]
    BoardCountMismatch {
        guess: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed history entry {0:?} (expected GUESS:o1,o2,o3,o4)")]
    MalformedHistory(String),

    #[error("no outcome given for {guess} on unsolved board {board}")]
    MissingOutcome { guess: String, board: usize },

    #[error("answers are unknown; record outcomes instead")]
    AnswersUnknown,

    #[error("a game needs between 1 and 4 boards, got {0}")]
    InvalidBoardCount(usize),

    #[error("only {0} eligible words, at least 4 are needed")]
    NotEnoughWords(usize),

    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{0} is before the first daily puzzle")]
    DateBeforeLaunch(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
