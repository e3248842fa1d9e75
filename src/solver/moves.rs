//! Scored candidate moves

use crate::core::Word;
use std::cmp::Ordering;

/// A guess with its expected plays and information gain
#[derive(Debug, Clone, PartialEq)]
pub struct PossibleMove {
    pub guess: usize,
    pub word: Word,
    /// Whether the guess is a candidate on some board
    pub solves_board: bool,
    /// Expected guesses to finish, counting this one
    pub expected_plays: f64,
    /// Information gain summed over the boards
    pub information_gain: f64,
}

impl PossibleMove {
    /// Fewest expected plays first, then higher gain, then lower guess index
    #[must_use]
    pub fn ranking_order(a: &Self, b: &Self) -> Ordering {
        a.expected_plays
            .total_cmp(&b.expected_plays)
            .then(b.information_gain.total_cmp(&a.information_gain))
            .then(a.guess.cmp(&b.guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(guess: usize, expected_plays: f64, information_gain: f64) -> PossibleMove {
        PossibleMove {
            guess,
            word: Word::new("CRANE").unwrap(),
            solves_board: false,
            expected_plays,
            information_gain,
        }
    }

    #[test]
    fn sorts_by_plays_then_gain_then_index() {
        let mut moves = vec![mv(3, 2.0, 1.0), mv(1, 1.5, 0.5), mv(2, 2.0, 1.5), mv(0, 2.0, 1.0)];
        moves.sort_by(PossibleMove::ranking_order);
        let order: Vec<usize> = moves.iter().map(|m| m.guess).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }
}
