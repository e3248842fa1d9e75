//! Expected-plays game-tree search
//!
//! `solve` returns the guess that minimises the expected number of further
//! guesses needed to finish every board, together with that expectation.
//!
//! # Algorithm
//! 1. No boards left: 0 plays.
//! 2. Every board determined: one play per board.
//! 3. A determined board is always played next (forced play).
//! 4. One board with two candidates: 1.5 plays.
//! 5. Otherwise each guess partitions every board by outcome; the Cartesian
//!    product of those groups enumerates the joint futures, each weighted by
//!    its candidate count. Candidate words are tried first and the search
//!    stops at the best value achievable for the smallest board. Only when
//!    that restricted search cannot beat `boards + 1` are the top guesses by
//!    information gain from the wider pool evaluated too.

use super::config::{SolverConfig, TWO_CANDIDATE_PLAYS, best_possible, trivial_bound};
use super::entropy::total_information_gain;
use super::moves::PossibleMove;
use super::quad::QuadState;
use crate::core::{Outcome, Word};
use crate::error::{Error, Result};
use crate::matrix::OutcomeMatrix;
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Counters collected while searching
///
/// Threaded through the recursion by `&mut`; parallel callers keep one per
/// task and merge them with [`SearchStats::absorb`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited
    pub nodes: u64,
    /// Deepest recursion level reached
    pub max_depth: usize,
    /// Restricted searches that stopped early at the best possible value
    pub bound_exits: u64,
    /// Restricted searches that fell back to information-gain ranking
    pub fallbacks: u64,
    /// Guesses skipped because they could not split any board
    pub pruned: u64,
    /// Subtrees scored with the depth penalty
    pub depth_cutoffs: u64,
}

impl SearchStats {
    /// Merge counters from another search
    pub fn absorb(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.bound_exits += other.bound_exits;
        self.fallbacks += other.fallbacks;
        self.pruned += other.pruned;
        self.depth_cutoffs += other.depth_cutoffs;
    }

    fn visit(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Best play for a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Expected guesses still needed, including `guess`
    pub expected_plays: f64,
    /// Guess index to play, `None` once the game is won
    pub guess: Option<usize>,
    pub stats: SearchStats,
}

impl Solution {
    /// The recommended word, if any
    #[must_use]
    pub fn word<'m>(&self, matrix: &'m OutcomeMatrix) -> Option<&'m Word> {
        self.guess.map(|g| matrix.guess_word(g))
    }
}

#[derive(Debug, Clone, Copy)]
struct Evaluation {
    expected: f64,
    guess: Option<usize>,
}

/// Guesses the search may consider below the current level
#[derive(Clone, Copy)]
enum Pool<'p> {
    /// Every guessable word
    Full,
    /// Only these guess indices
    Restricted(&'p [usize]),
}

/// Optimal-play search over a shared outcome matrix
pub struct Solver<'a> {
    matrix: &'a OutcomeMatrix,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(matrix: &'a OutcomeMatrix, config: SolverConfig) -> Self {
        Self { matrix, config }
    }

    #[must_use]
    pub const fn matrix(&self) -> &'a OutcomeMatrix {
        self.matrix
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the best next guess and the expected plays to finish
    ///
    /// # Errors
    /// Returns an error if the state has an empty board, too many boards or a
    /// candidate outside the matrix.
    ///
    /// # Examples
    /// ```
    /// use quordle_solver::matrix::matrix_from_strs;
    /// use quordle_solver::solver::{QuadState, Solver, SolverConfig};
    ///
    /// let words = ["BERET", "EGRET", "ETHER", "EXERT"];
    /// let matrix = matrix_from_strs(&words, &words).unwrap();
    /// let state = QuadState::from_words(&matrix, &[&words[..]]).unwrap();
    ///
    /// let solution = Solver::new(&matrix, SolverConfig::default()).solve(&state).unwrap();
    /// assert!((solution.expected_plays - 1.75).abs() < 1e-9);
    /// assert_eq!(solution.word(&matrix).unwrap().text(), "BERET");
    /// ```
    pub fn solve(&self, state: &QuadState) -> Result<Solution> {
        self.check_state(state)?;
        let mut stats = SearchStats::default();
        let best = self.find_best_play(state, Pool::Full, 0, &mut stats);
        Ok(Solution {
            expected_plays: best.expected,
            guess: best.guess,
            stats,
        })
    }

    /// Expected plays to finish if `guess` is played next, counting `guess`
    ///
    /// Returns `None` for a guess that cannot split or finish any board.
    ///
    /// # Errors
    /// Returns an error if the state is invalid or `guess` is not a column of
    /// the matrix.
    pub fn evaluate_guess(&self, state: &QuadState, guess: usize) -> Result<Option<f64>> {
        self.check_state(state)?;
        let count = self.matrix.guess_count();
        if guess >= count {
            return Err(Error::GuessIndexOutOfRange { index: guess, count });
        }
        let mut stats = SearchStats::default();
        Ok(self
            .expected_after(state, guess, Pool::Full, 1, &mut stats, true)
            .map(|after| 1.0 + after))
    }

    /// Evaluate the candidate words and the best information-gain guesses
    ///
    /// Returns the `k` best moves, lowest expected plays first (higher gain,
    /// then lower guess index, break ties). Moves are evaluated in parallel.
    ///
    /// # Errors
    /// Returns an error if the state is invalid.
    pub fn rank_moves(&self, state: &QuadState, k: usize) -> Result<Vec<PossibleMove>> {
        self.check_state(state)?;
        if state.is_won() {
            return Ok(Vec::new());
        }

        let mut pool = self.restricted_guesses(state);
        let exclude: FxHashSet<usize> = pool.iter().copied().collect();
        pool.extend(self.fallback_guesses(state, Pool::Full, &exclude));

        let mut moves: Vec<PossibleMove> = pool
            .par_iter()
            .filter_map(|&guess| {
                let mut stats = SearchStats::default();
                let after = self.expected_after(state, guess, Pool::Full, 1, &mut stats, true)?;
                let column_of = |s: usize| self.matrix.guess_index_of_solution(s);
                Some(PossibleMove {
                    guess,
                    word: self.matrix.guess_word(guess).clone(),
                    solves_board: state.boards().iter().flatten().any(|&s| column_of(s) == guess),
                    expected_plays: 1.0 + after,
                    information_gain: total_information_gain(self.matrix, state.boards(), guess),
                })
            })
            .collect();

        moves.sort_by(PossibleMove::ranking_order);
        moves.truncate(k);
        Ok(moves)
    }

    /// Shape checks plus every candidate being a row of the matrix
    fn check_state(&self, state: &QuadState) -> Result<()> {
        state.validate()?;
        let count = self.matrix.solution_count();
        match state.boards().iter().flatten().find(|&&s| s >= count) {
            Some(&index) => Err(Error::SolutionIndexOutOfRange { index, count }),
            None => Ok(()),
        }
    }

    fn find_best_play(
        &self,
        state: &QuadState,
        pool: Pool<'_>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Evaluation {
        stats.visit(depth);

        let boards = state.boards();
        if boards.is_empty() {
            return Evaluation {
                expected: 0.0,
                guess: None,
            };
        }

        let first_word = |board: usize| self.matrix.guess_index_of_solution(boards[board][0]);

        if state.all_determined() {
            return Evaluation {
                expected: boards.len() as f64,
                guess: Some(first_word(0)),
            };
        }

        if let Some(board) = state.first_determined() {
            let guess = first_word(board);
            let others = state.without_board(board);
            let after = self
                .expected_after(&others, guess, pool, depth + 1, stats, false)
                .unwrap_or(0.0);
            return Evaluation {
                expected: 1.0 + after,
                guess: Some(guess),
            };
        }

        if boards.len() == 1 && boards[0].len() == 2 {
            return Evaluation {
                expected: TWO_CANDIDATE_PLAYS,
                guess: Some(first_word(0)),
            };
        }

        let restricted = self.restricted_guesses(state);
        let min_size = state.min_board_size().unwrap_or(1);
        let floor = best_possible(boards.len(), min_size);

        let mut best = Evaluation {
            expected: f64::INFINITY,
            guess: None,
        };

        for &guess in &restricted {
            let Some(after) = self.expected_after(
                state,
                guess,
                Pool::Restricted(&restricted),
                depth + 1,
                stats,
                true,
            ) else {
                stats.pruned += 1;
                continue;
            };

            let plays = 1.0 + after;
            if plays < best.expected {
                best = Evaluation {
                    expected: plays,
                    guess: Some(guess),
                };
                if plays <= floor {
                    stats.bound_exits += 1;
                    break;
                }
            }
        }

        if best.expected <= trivial_bound(boards.len()) {
            return best;
        }

        stats.fallbacks += 1;
        let exclude: FxHashSet<usize> = restricted.iter().copied().collect();
        for guess in self.fallback_guesses(state, pool, &exclude) {
            let Some(after) = self.expected_after(state, guess, pool, depth + 1, stats, true)
            else {
                stats.pruned += 1;
                continue;
            };

            let plays = 1.0 + after;
            if plays < best.expected {
                best = Evaluation {
                    expected: plays,
                    guess: Some(guess),
                };
            }
        }

        best
    }

    /// Expected plays after `guess`, averaged over every joint outcome
    fn expected_after(
        &self,
        state: &QuadState,
        guess: usize,
        pool: Pool<'_>,
        depth: usize,
        stats: &mut SearchStats,
        bail_useless: bool,
    ) -> Option<f64> {
        if state.is_won() {
            return Some(0.0);
        }

        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            stats.depth_cutoffs += 1;
            return Some(self.config.depth_penalty);
        }

        let groups: Vec<Vec<(Outcome, Vec<usize>)>> = state
            .boards()
            .iter()
            .map(|board| self.matrix.partition(board, guess))
            .collect();

        if bail_useless
            && groups.iter().all(|g| g.len() == 1)
            && !groups.iter().any(|g| g[0].0.is_all_correct())
        {
            return None;
        }

        let mut weighted = 0.0;
        let mut total = 0.0;
        for joint in groups.iter().map(|g| g.iter()).multi_cartesian_product() {
            let weight: f64 = joint.iter().map(|(_, c)| c.len() as f64).product();
            let next = QuadState::derived(
                joint
                    .iter()
                    .filter(|(outcome, _)| !outcome.is_all_correct())
                    .map(|(_, candidates)| candidates.clone())
                    .collect(),
            );
            let eval = self.find_best_play(&next, pool, depth, stats);
            weighted += eval.expected * weight;
            total += weight;
        }

        Some(weighted / total)
    }

    /// Candidate words as guess indices, smallest board first
    fn restricted_guesses(&self, state: &QuadState) -> Vec<usize> {
        state
            .restricted_words()
            .into_iter()
            .map(|s| self.matrix.guess_index_of_solution(s))
            .collect()
    }

    /// Top `fallback_limit` pool guesses with positive summed information gain
    fn fallback_guesses(
        &self,
        state: &QuadState,
        pool: Pool<'_>,
        exclude: &FxHashSet<usize>,
    ) -> Vec<usize> {
        let scored = |guess: usize| (guess, total_information_gain(self.matrix, state.boards(), guess));

        let mut by_gain: Vec<(usize, f64)> = match pool {
            Pool::Full => (0..self.matrix.guess_count())
                .filter(|g| !exclude.contains(g))
                .map(scored)
                .collect(),
            Pool::Restricted(words) => words
                .iter()
                .copied()
                .filter(|g| !exclude.contains(g))
                .map(scored)
                .collect(),
        };
        by_gain.retain(|&(_, gain)| gain > 0.0);
        by_gain.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        by_gain.truncate(self.config.fallback_limit);

        by_gain.into_iter().map(|(guess, _)| guess).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::matrix::matrix_from_strs;

    const E2E_WORDS: &[&str] = &[
        "BERET", "BERTH", "CATTY", "EGRET", "ETHER", "EXERT", "MIMIC", "PUFFY", "SPUNK", "WOOZY",
    ];

    fn e2e_matrix() -> OutcomeMatrix {
        matrix_from_strs(E2E_WORDS, E2E_WORDS).unwrap()
    }

    fn solve(matrix: &OutcomeMatrix, boards: &[&[&str]]) -> Solution {
        let state = QuadState::from_words(matrix, boards).unwrap();
        Solver::new(matrix, SolverConfig::default())
            .solve(&state)
            .unwrap()
    }

    fn word(matrix: &OutcomeMatrix, solution: &Solution) -> String {
        solution.word(matrix).unwrap().text().to_string()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_state_is_won() {
        let m = e2e_matrix();
        let solution = solve(&m, &[]);
        assert_close(solution.expected_plays, 0.0);
        assert_eq!(solution.guess, None);
    }

    #[test]
    fn singleton_board_takes_one_play() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["PUFFY"]]);
        assert_close(solution.expected_plays, 1.0);
        assert_eq!(word(&m, &solution), "PUFFY");
    }

    #[test]
    fn all_determined_boards_take_one_play_each() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["SPUNK"], &["CATTY"], &["PUFFY"]]);
        assert_close(solution.expected_plays, 3.0);
        assert_eq!(word(&m, &solution), "SPUNK");
    }

    #[test]
    fn two_candidates_take_one_and_a_half() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["ETHER", "EXERT"]]);
        assert_close(solution.expected_plays, 1.5);
        assert_eq!(word(&m, &solution), "ETHER");
    }

    #[test]
    fn forced_play_comes_first() {
        let words = ["FORGE", "FRANK", "GORGE", "OTHER"];
        let m = matrix_from_strs(&words, &words).unwrap();
        let solution = solve(&m, &[&["FRANK"], &["FORGE", "GORGE"]]);
        assert_eq!(word(&m, &solution), "FRANK");
        assert_close(solution.expected_plays, 2.0);
    }

    #[test]
    fn single_ambiguous_board() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["BERET", "EGRET", "ETHER", "EXERT"]]);
        assert_close(solution.expected_plays, 1.75);
        assert_eq!(word(&m, &solution), "BERET");
        assert_eq!(solution.stats.bound_exits, 1);
        assert_eq!(solution.stats.fallbacks, 0);
    }

    #[test]
    fn five_candidates_split_perfectly() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["BERET", "BERTH", "EGRET", "ETHER", "EXERT"]]);
        assert_close(solution.expected_plays, 1.8);
        assert_eq!(word(&m, &solution), "BERET");
    }

    #[test]
    fn four_boards_with_informative_forced_play() {
        // CATTY's second T is green against BERTH, splitting it off
        let m = e2e_matrix();
        let solution = solve(
            &m,
            &[
                &["BERET", "BERTH", "EGRET", "ETHER", "EXERT"],
                &["CATTY"],
                &["PUFFY"],
                &["SPUNK"],
            ],
        );
        assert_eq!(word(&m, &solution), "CATTY");
        assert_close(solution.expected_plays, 1.0 + (4.0 * 3.75 + 3.0) / 5.0);
    }

    #[test]
    fn four_boards_with_uninformative_forced_plays() {
        let m = e2e_matrix();
        let solution = solve(
            &m,
            &[
                &["BERET", "BERTH", "EGRET", "ETHER", "EXERT"],
                &["MIMIC"],
                &["PUFFY"],
                &["SPUNK"],
            ],
        );
        assert_eq!(word(&m, &solution), "MIMIC");
        assert_close(solution.expected_plays, 4.8);
    }

    #[test]
    fn two_ambiguous_boards_use_restricted_search() {
        let m = e2e_matrix();
        let solution = solve(&m, &[&["BERET", "EGRET"], &["ETHER", "EXERT"]]);
        // BERET splits both boards: 1 + (1 + 1 + 2 + 2) / 4
        assert_close(solution.expected_plays, 2.5);
        assert_eq!(word(&m, &solution), "BERET");
        assert_eq!(solution.stats.fallbacks, 0);
    }

    #[test]
    fn fallback_searches_the_wider_pool() {
        // Candidates differ only in the first letter, so playing them one at
        // a time averages 3.5 plays
        let solutions = ["FIGHT", "LIGHT", "MIGHT", "NIGHT", "RIGHT", "SIGHT"];
        let guesses = [
            "FIGHT", "FLAME", "LIGHT", "MIGHT", "NIGHT", "RIGHT", "SIGHT", "SNARL",
        ];
        let m = matrix_from_strs(&solutions, &guesses).unwrap();
        let state = QuadState::from_words(&m, &[&solutions[..]]).unwrap();
        let solution = Solver::new(&m, SolverConfig::default())
            .solve(&state)
            .unwrap();

        // SNARL isolates four words and leaves FIGHT/MIGHT together
        assert_eq!(word(&m, &solution), "SNARL");
        assert_close(solution.expected_plays, 1.0 + 7.0 / 6.0);
        assert!(solution.stats.fallbacks >= 1);
    }

    #[test]
    fn exhausted_fallback_keeps_the_restricted_answer() {
        // No outside guess exists, so the wider pool adds nothing
        let words = ["FIGHT", "LIGHT", "MIGHT", "NIGHT"];
        let m = matrix_from_strs(&words, &words).unwrap();
        let state = QuadState::from_words(&m, &[&words[..]]).unwrap();
        let solution = Solver::new(&m, SolverConfig::default())
            .solve(&state)
            .unwrap();

        assert_close(solution.expected_plays, 2.5);
        assert_eq!(word(&m, &solution), "FIGHT");
        assert_eq!(solution.stats.fallbacks, 1);
        assert_eq!(solution.stats.bound_exits, 0);
    }

    #[test]
    fn stats_absorb_merges_counters() {
        let mut total = SearchStats {
            nodes: 3,
            max_depth: 2,
            ..SearchStats::default()
        };
        let other = SearchStats {
            nodes: 4,
            max_depth: 5,
            fallbacks: 1,
            ..SearchStats::default()
        };
        total.absorb(&other);
        assert_eq!(total.nodes, 7);
        assert_eq!(total.max_depth, 5);
        assert_eq!(total.fallbacks, 1);
    }

    #[test]
    fn rejects_invalid_state() {
        let m = e2e_matrix();
        let solver = Solver::new(&m, SolverConfig::default());
        let crowded = QuadState::derived(vec![vec![0]; 5]);
        assert_eq!(solver.solve(&crowded), Err(Error::TooManyBoards(5)));
        assert_eq!(
            solver.rank_moves(&crowded, 1).map(|m| m.len()),
            Err(Error::TooManyBoards(5))
        );
    }

    #[test]
    fn rejects_indices_outside_the_matrix() {
        let words = ["BERET", "EGRET", "ETHER"];
        let m = matrix_from_strs(&words, &words).unwrap();
        let solver = Solver::new(&m, SolverConfig::default());
        let out_of_range = Error::SolutionIndexOutOfRange {
            index: 99,
            count: 3,
        };

        let wide = QuadState::new(vec![vec![0, 1, 99]]).unwrap();
        assert_eq!(solver.solve(&wide), Err(out_of_range.clone()));
        assert_eq!(
            solver.rank_moves(&wide, 1).map(|m| m.len()),
            Err(out_of_range.clone())
        );

        let pair = QuadState::new(vec![vec![0, 99]]).unwrap();
        assert_eq!(solver.solve(&pair), Err(out_of_range));

        let valid = QuadState::new(vec![vec![0, 1]]).unwrap();
        assert_eq!(
            solver.evaluate_guess(&valid, 3),
            Err(Error::GuessIndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn evaluate_guess_matches_solve() {
        let m = e2e_matrix();
        let state = QuadState::from_words(&m, &[&["BERET", "EGRET", "ETHER", "EXERT"]]).unwrap();
        let solver = Solver::new(&m, SolverConfig::default());
        let beret = m.guess_index("BERET").unwrap();
        let woozy = m.guess_index("WOOZY").unwrap();

        assert_close(solver.evaluate_guess(&state, beret).unwrap().unwrap(), 1.75);
        assert_eq!(solver.evaluate_guess(&state, woozy).unwrap(), None);
    }

    #[test]
    fn rank_moves_orders_by_expected_plays() {
        let m = e2e_matrix();
        let state = QuadState::from_words(&m, &[&["BERET", "BERTH", "EGRET", "ETHER", "EXERT"]]).unwrap();
        let solver = Solver::new(&m, SolverConfig::default());
        let moves = solver.rank_moves(&state, 3).unwrap();

        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].word.text(), "BERET");
        assert!(moves[0].solves_board);
        assert_close(moves[0].expected_plays, 1.8);
        for pair in moves.windows(2) {
            assert!(pair[0].expected_plays <= pair[1].expected_plays);
        }
    }

    #[test]
    fn depth_limit_applies_penalty() {
        let m = e2e_matrix();
        let state = QuadState::from_words(&m, &[&["BERET", "EGRET", "ETHER", "EXERT"]]).unwrap();
        let config = SolverConfig {
            max_depth: Some(0),
            ..SolverConfig::default()
        };
        let solution = Solver::new(&m, config).solve(&state).unwrap();
        assert!(solution.stats.depth_cutoffs > 0);
        assert!(solution.expected_plays > 1.75);
    }

    #[test]
    fn won_state_is_not_cut_off() {
        let m = e2e_matrix();
        let config = SolverConfig {
            max_depth: Some(0),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&m, config);
        let won = QuadState::won();
        let puffy = m.guess_index("PUFFY").unwrap();

        assert_eq!(solver.evaluate_guess(&won, puffy), Ok(Some(1.0)));
    }
}
