//! A single board's progress through a game

use crate::core::Outcome;
use crate::matrix::OutcomeMatrix;

/// Candidates left on one board, or the word that solved it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    /// Solution indices still consistent with the history
    Pending(Vec<usize>),
    /// Solution index confirmed by an all-correct outcome
    Solved(usize),
}

impl Board {
    /// A fresh board where every solution is possible
    #[must_use]
    pub fn fresh(matrix: &OutcomeMatrix) -> Self {
        Self::Pending(matrix.all_solutions())
    }

    /// Narrow the board by an observed outcome
    ///
    /// An all-correct outcome solves the board with the guessed word. Returns
    /// `None` when no candidate is consistent with the outcome. Solved boards
    /// are returned unchanged.
    #[must_use]
    pub fn apply(&self, matrix: &OutcomeMatrix, guess: usize, outcome: Outcome) -> Option<Self> {
        let Self::Pending(candidates) = self else {
            return Some(self.clone());
        };

        let remaining = matrix.filter(candidates, guess, outcome);
        match remaining.as_slice() {
            [] => None,
            [solution] if outcome.is_all_correct() => Some(Self::Solved(*solution)),
            _ => Some(Self::Pending(remaining)),
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Remaining candidates, `None` once solved
    #[must_use]
    pub fn candidates(&self) -> Option<&[usize]> {
        match self {
            Self::Pending(candidates) => Some(candidates),
            Self::Solved(_) => None,
        }
    }

    /// Candidate count, with a solved board counting as one
    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates().map_or(1, <[usize]>::len)
    }

    /// The only word still possible on a pending board
    #[must_use]
    pub fn determined(&self) -> Option<usize> {
        match self.candidates() {
            Some(&[solution]) => Some(solution),
            _ => None,
        }
    }
}
