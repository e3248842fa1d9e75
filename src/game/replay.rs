//! Replaying a game's guess history into a solver state
//!
//! A game is replayed either from its known answers, scoring each guess, or
//! from recorded outcomes such as `CRANE:..y..,g....,-----,.y..g`.

use super::board::Board;
use crate::core::{Outcome, Word};
use crate::error::{Error, Result};
use crate::matrix::OutcomeMatrix;
use crate::solver::{MAX_BOARDS, QuadState};
use std::str::FromStr;

/// Placeholder outcome for a board that is already solved
pub const SOLVED_MARKER: &str = "-----";

/// One recorded guess with an outcome per board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    /// `None` for boards solved before this guess
    pub outcomes: Vec<Option<Outcome>>,
}

impl FromStr for HistoryEntry {
    type Err = Error;

    /// Parse `GUESS:o1,o2,o3,o4`, with `-----` for solved boards
    fn from_str(s: &str) -> Result<Self> {
        let (guess, outcomes) = s
            .split_once(':')
            .ok_or_else(|| Error::MalformedHistory(s.to_string()))?;

        let guess = Word::new(guess)?;
        let outcomes = outcomes
            .split(',')
            .map(str::trim)
            .map(|o| {
                if o == SOLVED_MARKER {
                    Ok(None)
                } else {
                    o.parse::<Outcome>().map(Some)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if outcomes.is_empty() || outcomes.len() > MAX_BOARDS {
            return Err(Error::MalformedHistory(s.to_string()));
        }

        Ok(Self { guess, outcomes })
    }
}

/// Effect of one guess on the game
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    pub guess: usize,
    pub outcomes: Vec<Option<Outcome>>,
    /// Candidates left per board, 1 for solved boards
    pub counts: Vec<usize>,
    /// Product of `counts`
    pub combinations: u64,
    /// log₂ of how much the guess shrank the combinations
    pub bits_gained: f64,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct GameReplay<'m> {
    matrix: &'m OutcomeMatrix,
    boards: Vec<Board>,
    answers: Option<Vec<usize>>,
    steps: Vec<ReplayStep>,
}

impl<'m> GameReplay<'m> {
    /// Start a game whose answers are unknown
    ///
    /// # Errors
    /// Returns `InvalidBoardCount` unless `board_count` is between 1 and 4.
    pub fn new(matrix: &'m OutcomeMatrix, board_count: usize) -> Result<Self> {
        if board_count == 0 || board_count > MAX_BOARDS {
            return Err(Error::InvalidBoardCount(board_count));
        }
        Ok(Self {
            matrix,
            boards: vec![Board::fresh(matrix); board_count],
            answers: None,
            steps: Vec::new(),
        })
    }

    /// Start a game with known answers, one per board
    ///
    /// # Errors
    /// Returns an error if an answer is not a solution word or the number of
    /// answers is not between 1 and 4.
    ///
    /// # Examples
    /// ```
    /// use quordle_solver::game::GameReplay;
    /// use quordle_solver::matrix::matrix_from_strs;
    ///
    /// let words = ["BERET", "BERTH", "CATTY", "EGRET", "PUFFY", "SPUNK"];
    /// let matrix = matrix_from_strs(&words, &words).unwrap();
    /// let mut game = GameReplay::with_answers(&matrix, &["BERTH", "CATTY", "PUFFY", "SPUNK"]).unwrap();
    ///
    /// game.play("CATTY").unwrap();
    /// let state = game.quad_state().unwrap();
    /// assert_eq!(state.board_count(), 3);
    /// ```
    pub fn with_answers(matrix: &'m OutcomeMatrix, answers: &[&str]) -> Result<Self> {
        let mut game = Self::new(matrix, answers.len())?;
        let answers = answers
            .iter()
            .map(|a| matrix.solution_index(a))
            .collect::<Result<Vec<_>>>()?;
        game.answers = Some(answers);
        Ok(game)
    }

    /// Score `guess` against the known answers and apply it
    ///
    /// # Errors
    /// Returns `AnswersUnknown` for a game without answers, or an error if the
    /// guess is not guessable.
    pub fn play(&mut self, guess: &str) -> Result<&ReplayStep> {
        let answers = self.answers.as_ref().ok_or(Error::AnswersUnknown)?;
        let column = self.matrix.guess_index(guess)?;

        let outcomes = answers
            .iter()
            .zip(&self.boards)
            .map(|(&answer, board)| {
                (!board.is_solved()).then(|| self.matrix.lookup(answer, column))
            })
            .collect();

        self.apply(column, outcomes)
    }

    /// Apply a recorded history entry
    ///
    /// # Errors
    /// Returns an error if the entry has the wrong number of outcomes, omits
    /// the outcome of an unsolved board, or leaves a board without candidates.
    pub fn record(&mut self, entry: &HistoryEntry) -> Result<&ReplayStep> {
        if entry.outcomes.len() != self.boards.len() {
            return Err(Error::BoardCountMismatch {
                guess: entry.guess.text().to_string(),
                expected: self.boards.len(),
                found: entry.outcomes.len(),
            });
        }
        let column = self.matrix.guess_index(entry.guess.text())?;
        self.apply(column, entry.outcomes.clone())
    }

    fn apply(&mut self, guess: usize, outcomes: Vec<Option<Outcome>>) -> Result<&ReplayStep> {
        let mut boards = Vec::with_capacity(self.boards.len());
        for (i, (board, outcome)) in self.boards.iter().zip(&outcomes).enumerate() {
            let next = match (board, outcome) {
                (Board::Solved(_), _) => board.clone(),
                (Board::Pending(_), None) => {
                    return Err(Error::MissingOutcome {
                        guess: self.matrix.guess_word(guess).text().to_string(),
                        board: i,
                    });
                }
                (Board::Pending(_), Some(outcome)) => board
                    .apply(self.matrix, guess, *outcome)
                    .ok_or(Error::EmptyBoard(i))?,
            };
            boards.push(next);
        }

        let before = self.combinations();
        self.boards = boards;
        let combinations = self.combinations();

        self.steps.push(ReplayStep {
            guess,
            outcomes,
            counts: self.boards.iter().map(Board::count).collect(),
            combinations,
            bits_gained: (before as f64).log2() - (combinations as f64).log2(),
        });
        let last = self.steps.len() - 1;
        Ok(&self.steps[last])
    }

    /// Joint answer combinations still possible
    #[must_use]
    pub fn combinations(&self) -> u64 {
        self.boards
            .iter()
            .map(|b| b.count() as u64)
            .fold(1u64, u64::saturating_mul)
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    #[must_use]
    pub const fn matrix(&self) -> &'m OutcomeMatrix {
        self.matrix
    }

    /// Whether every board is solved
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.boards.iter().all(Board::is_solved)
    }

    /// Solver state over the unsolved boards
    ///
    /// # Errors
    /// Returns an error if the replay left the state invalid.
    pub fn quad_state(&self) -> Result<QuadState> {
        QuadState::new(
            self.boards
                .iter()
                .filter_map(|b| b.candidates().map(<[usize]>::to_vec))
                .collect(),
        )
    }
}
