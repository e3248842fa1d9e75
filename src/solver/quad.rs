//! Remaining candidates across the unsolved boards

use crate::error::{Error, Result};
use crate::matrix::OutcomeMatrix;

/// Most boards a state may hold
pub const MAX_BOARDS: usize = 4;

/// Candidate sets of every unsolved board
///
/// Each inner vector holds solution indices into the [`OutcomeMatrix`].
/// Solved boards are not represented; an empty state means the game is won.
/// States are never edited in place: each guess derives new states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuadState {
    boards: Vec<Vec<usize>>,
}

impl QuadState {
    /// Create a state, checking that every board has a candidate
    ///
    /// # Errors
    /// Returns `EmptyBoard` for a board without candidates and `TooManyBoards`
    /// for more than [`MAX_BOARDS`] boards.
    pub fn new(boards: Vec<Vec<usize>>) -> Result<Self> {
        let state = Self { boards };
        state.validate()?;
        Ok(state)
    }

    /// The terminal state with nothing left to solve
    #[must_use]
    pub const fn won() -> Self {
        Self { boards: Vec::new() }
    }

    /// Build a state from candidate words per board
    ///
    /// # Errors
    /// Returns an error if a word is not a solution or the state is invalid.
    ///
    /// # Examples
    /// ```
    /// use quordle_solver::matrix::matrix_from_strs;
    /// use quordle_solver::solver::QuadState;
    ///
    /// let words = ["FRANK", "FORGE", "GORGE"];
    /// let matrix = matrix_from_strs(&words, &words).unwrap();
    /// let state = QuadState::from_words(&matrix, &[&["FRANK"], &["FORGE", "GORGE"]]).unwrap();
    /// assert_eq!(state.board_count(), 2);
    /// assert_eq!(state.first_determined(), Some(0));
    /// ```
    pub fn from_words(matrix: &OutcomeMatrix, boards: &[&[&str]]) -> Result<Self> {
        let boards = boards
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|w| matrix.solution_index(w))
                    .collect::<Result<Vec<usize>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(boards)
    }

    /// Wrap boards derived from an already valid state
    pub(crate) fn derived(boards: Vec<Vec<usize>>) -> Self {
        debug_assert!(boards.iter().all(|b| !b.is_empty()));
        Self { boards }
    }

    /// Check the state invariants
    ///
    /// # Errors
    /// See [`QuadState::new`].
    pub fn validate(&self) -> Result<()> {
        if self.boards.len() > MAX_BOARDS {
            return Err(Error::TooManyBoards(self.boards.len()));
        }
        match self.boards.iter().position(Vec::is_empty) {
            Some(board) => Err(Error::EmptyBoard(board)),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn boards(&self) -> &[Vec<usize>] {
        &self.boards
    }

    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.boards.is_empty()
    }

    /// True when every board is down to one word
    #[must_use]
    pub fn all_determined(&self) -> bool {
        self.boards.iter().all(|b| b.len() == 1)
    }

    /// Index of the first board with exactly one candidate
    #[must_use]
    pub fn first_determined(&self) -> Option<usize> {
        self.boards.iter().position(|b| b.len() == 1)
    }

    #[must_use]
    pub fn min_board_size(&self) -> Option<usize> {
        self.boards.iter().map(Vec::len).min()
    }

    /// Number of joint answer combinations still possible
    #[must_use]
    pub fn combinations(&self) -> u64 {
        self.boards.iter().map(|b| b.len() as u64).product()
    }

    /// The same state with one board removed
    #[must_use]
    pub fn without_board(&self, board: usize) -> Self {
        let boards = self
            .boards
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != board)
            .map(|(_, b)| b.clone())
            .collect();
        Self { boards }
    }

    /// Every word still possible on some board
    ///
    /// Smallest boards come first, then vocabulary order within a board;
    /// duplicates keep their first position.
    #[must_use]
    pub fn restricted_words(&self) -> Vec<usize> {
        let mut by_size: Vec<&Vec<usize>> = self.boards.iter().collect();
        by_size.sort_by_key(|b| b.len());

        let mut seen = rustc_hash::FxHashSet::default();
        by_size
            .into_iter()
            .flatten()
            .copied()
            .filter(|&solution| seen.insert(solution))
            .collect()
    }

    /// Whether `solution` is a candidate on any board
    #[must_use]
    pub fn contains(&self, solution: usize) -> bool {
        self.boards.iter().any(|b| b.contains(&solution))
    }

    /// Render candidate words per board, for reports
    #[must_use]
    pub fn describe(&self, matrix: &OutcomeMatrix) -> Vec<Vec<String>> {
        self.boards
            .iter()
            .map(|b| {
                b.iter()
                    .map(|&s| matrix.solution_word(s).text().to_string())
                    .collect()
            })
            .collect()
    }
}
