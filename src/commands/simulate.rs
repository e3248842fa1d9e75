//! Opening simulation
//!
//! Plays a fixed opening against random four-answer games and reports how
//! often a board is already pinned down, and which follow-up guess gains the
//! most information.

use crate::game::GameReplay;
use crate::matrix::OutcomeMatrix;
use crate::solver::MAX_BOARDS;
use crate::solver::entropy::select_best_guess;
use anyhow::{Context, Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Simulation settings
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    /// Guesses played at the start of every game
    pub opening: Vec<String>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(opening: Vec<String>) -> Self {
        Self {
            games: 100,
            seed: 0,
            opening,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSample {
    pub answers: Vec<usize>,
    /// Whether some board has a single candidate (or is solved) after the opening
    pub has_determined: bool,
    /// Best next guess by summed information gain, `None` once all boards are solved
    pub best_next: Option<usize>,
    pub combinations: u64,
}

/// Aggregated simulation results
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub games: usize,
    pub determined: usize,
    /// Best follow-up guesses with how often each was best, most frequent first
    pub best_next: Vec<(usize, usize)>,
    pub samples: Vec<GameSample>,
}

impl SimulationReport {
    #[must_use]
    pub fn determined_fraction(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.determined as f64 / self.games as f64
        }
    }
}

/// Play one game with the given answers through the opening
///
/// # Errors
///
/// Returns an error if an opening word is not guessable.
pub fn simulate_game(matrix: &OutcomeMatrix, answers: &[usize], opening: &[String]) -> Result<GameSample> {
    let names: Vec<&str> = answers
        .iter()
        .map(|&a| matrix.solution_word(a).text())
        .collect();
    let mut game = GameReplay::with_answers(matrix, &names)?;
    for guess in opening {
        game.play(guess)
            .with_context(|| format!("cannot play opening {guess}"))?;
    }

    let has_determined = game
        .boards()
        .iter()
        .any(|b| b.is_solved() || b.determined().is_some());

    let pending: Vec<Vec<usize>> = game
        .boards()
        .iter()
        .filter_map(|b| b.candidates().map(<[usize]>::to_vec))
        .collect();
    let best_next = if pending.is_empty() {
        None
    } else {
        select_best_guess(matrix, &pending, &matrix.all_guesses()).map(|r| r.guess)
    };

    Ok(GameSample {
        answers: answers.to_vec(),
        has_determined,
        best_next,
        combinations: game.combinations(),
    })
}

/// Simulate `config.games` random games in parallel
///
/// Each game draws four distinct answers from its own generator seeded with
/// `seed + game`, so results do not depend on thread scheduling.
///
/// # Errors
///
/// Returns an error if there are fewer than four solutions or an opening word
/// is not guessable.
pub fn run_simulation(matrix: &OutcomeMatrix, config: &SimulationConfig) -> Result<SimulationReport> {
    ensure!(
        matrix.solution_count() >= MAX_BOARDS,
        "need at least {MAX_BOARDS} solutions to simulate, have {}",
        matrix.solution_count()
    );
    for guess in &config.opening {
        matrix
            .guess_index(guess)
            .with_context(|| format!("cannot play opening {guess}"))?;
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("simulating");

    let samples = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game as u64));
            let answers = sample(&mut rng, matrix.solution_count(), MAX_BOARDS).into_vec();
            let result = simulate_game(matrix, &answers, &config.opening);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();

    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for guess in samples.iter().filter_map(|s| s.best_next) {
        *counts.entry(guess).or_insert(0) += 1;
    }
    let mut best_next: Vec<(usize, usize)> = counts.into_iter().collect();
    best_next.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    Ok(SimulationReport {
        games: samples.len(),
        determined: samples.iter().filter(|s| s.has_determined).count(),
        best_next,
        samples,
    })
}
