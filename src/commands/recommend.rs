//! Next-play recommendation for a game in progress
//!
//! Replays the history, then either runs the exact expected-plays search or,
//! when too many answer combinations remain, ranks guesses by information gain.

use crate::game::{GameReplay, HistoryEntry};
use crate::matrix::OutcomeMatrix;
use crate::solver::entropy::{RankedGuess, rank_by_information_gain};
use crate::solver::{PossibleMove, QuadState, RecommendConfig, SearchMode, Solution, Solver};
use anyhow::{Context, Result};

/// What to play next
#[derive(Debug, Clone)]
pub enum Recommendation {
    /// Every board is solved
    Won,

    /// Result of the exact search
    Exhaustive {
        state: QuadState,
        solution: Solution,
        alternatives: Vec<PossibleMove>,
    },

    /// Best guesses by summed information gain
    InformationGain { ranked: Vec<RankedGuess> },
}

/// Replay guesses against known answers
///
/// # Errors
///
/// Returns an error if an answer or guess is not in the vocabulary.
pub fn replay_with_answers<'m>(
    matrix: &'m OutcomeMatrix,
    answers: &[String],
    guesses: &[String],
) -> Result<GameReplay<'m>> {
    let answers: Vec<&str> = answers.iter().map(String::as_str).collect();
    let mut game = GameReplay::with_answers(matrix, &answers).context("invalid answers")?;
    for guess in guesses {
        game.play(guess)
            .with_context(|| format!("cannot play {guess}"))?;
    }
    Ok(game)
}

/// Replay recorded `GUESS:o1,o2,o3,o4` entries
///
/// The board count is taken from the first entry.
///
/// # Errors
///
/// Returns an error for a malformed or contradictory entry.
pub fn replay_history<'m>(matrix: &'m OutcomeMatrix, entries: &[String]) -> Result<GameReplay<'m>> {
    let entries = entries
        .iter()
        .map(|e| e.parse::<HistoryEntry>())
        .collect::<Result<Vec<_>, _>>()?;

    let boards = entries.first().map_or(4, |e| e.outcomes.len());
    let mut game = GameReplay::new(matrix, boards)?;
    for entry in &entries {
        game.record(entry)
            .with_context(|| format!("cannot apply history entry for {}", entry.guess))?;
    }
    Ok(game)
}

/// Recommend the next play for a replayed game
///
/// # Errors
///
/// Returns an error if the replayed state is invalid.
pub fn recommend(game: &GameReplay<'_>, config: &RecommendConfig) -> Result<Recommendation> {
    if game.is_won() {
        return Ok(Recommendation::Won);
    }

    let matrix = game.matrix();
    let state = game.quad_state()?;

    match config.mode(state.combinations()) {
        SearchMode::Exhaustive => {
            let solver = Solver::new(matrix, config.solver);
            let solution = solver.solve(&state)?;
            let alternatives = solver.rank_moves(&state, config.shortlist)?;
            Ok(Recommendation::Exhaustive {
                state,
                solution,
                alternatives,
            })
        }
        SearchMode::InformationGain => {
            let ranked = rank_by_information_gain(
                matrix,
                state.boards(),
                &matrix.all_guesses(),
                Some(config.shortlist),
            );
            Ok(Recommendation::InformationGain { ranked })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_from_strs;

    const WORDS: &[&str] = &[
        "BERET", "BERTH", "CATTY", "EGRET", "ETHER", "EXERT", "MIMIC", "PUFFY", "SPUNK",
    ];

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn small_state_uses_exact_search() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let game = replay_with_answers(
            &m,
            &strings(&["BERET", "CATTY", "PUFFY", "SPUNK"]),
            &strings(&["PUFFY"]),
        )
        .unwrap();

        let config = RecommendConfig {
            exhaustive_threshold: 10_000,
            ..RecommendConfig::default()
        };
        match recommend(&game, &config).unwrap() {
            Recommendation::Exhaustive {
                solution,
                alternatives,
                ..
            } => {
                // CATTY is the only word left on its board, so it is forced
                let catty = m.guess_index("CATTY").unwrap();
                assert_eq!(solution.guess, Some(catty));
                assert!((solution.expected_plays - 3.5).abs() < 1e-9);

                let ranked = alternatives
                    .iter()
                    .find(|mv| mv.guess == catty)
                    .unwrap();
                assert!(ranked.solves_board);
                assert!((ranked.expected_plays - solution.expected_plays).abs() < 1e-9);
                for pair in alternatives.windows(2) {
                    assert!(pair[0].expected_plays <= pair[1].expected_plays);
                }
            }
            other => panic!("expected exhaustive search, got {other:?}"),
        }
    }

    #[test]
    fn large_state_ranks_by_gain() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let game = replay_history(&m, &[]).unwrap();
        let config = RecommendConfig {
            exhaustive_threshold: 10,
            shortlist: 3,
            ..RecommendConfig::default()
        };
        match recommend(&game, &config).unwrap() {
            Recommendation::InformationGain { ranked } => {
                assert_eq!(ranked.len(), 3);
                assert!(ranked[0].information_gain >= ranked[2].information_gain);
            }
            other => panic!("expected gain ranking, got {other:?}"),
        }
    }

    #[test]
    fn won_game() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let game = replay_with_answers(&m, &strings(&["PUFFY"]), &strings(&["PUFFY"])).unwrap();
        assert!(matches!(
            recommend(&game, &RecommendConfig::default()).unwrap(),
            Recommendation::Won
        ));
    }

    #[test]
    fn history_replay_reports_bad_entries() {
        let m = matrix_from_strs(WORDS, WORDS).unwrap();
        let err = replay_history(&m, &strings(&["CATTY:ggggy,.....,.....,....."])).unwrap_err();
        assert!(format!("{err:#}").contains("CATTY"), "{err:#}");

        assert!(replay_history(&m, &strings(&["nonsense"])).is_err());
    }
}
