//! Quordle Solver - CLI
//!
//! Replays a Quordle game and recommends the next guess, either by exact
//! expected-plays search or by information gain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use quordle_solver::{
    commands::{
        SimulationConfig, analyze_word, daily_answers, find_next_appearance, opening_pair,
        rank_openings, recommend, replay_history, replay_with_answers, run_simulation,
    },
    game::{GameReplay, daily::parse_date},
    matrix::OutcomeMatrix,
    output::{
        print_analysis_result, print_daily, print_history, print_next_appearance, print_openings,
        print_pair, print_recommendation, print_replay, print_simulation,
    },
    solver::{RecommendConfig, SolverConfig, config},
    wordlists::{DEFAULT_ALLOWED_PATH, DEFAULT_ANSWERS_PATH, DEFAULT_BLACKLIST_PATH, Vocabulary},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "quordle_solver",
    about = "Quordle solver: optimal expected-play search over four simultaneous boards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Possible answers, one per line
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    wordbank: PathBuf,

    /// Extra allowed guesses, one per line
    #[arg(long, global = true, default_value = DEFAULT_ALLOWED_PATH)]
    allowed: PathBuf,

    /// Words never chosen as daily answers (default: words/blacklist.txt if present)
    #[arg(long, global = true)]
    blacklist: Option<PathBuf>,

    /// Show all possibilities, alternatives and search statistics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Wider-pool guesses tried when the candidate-only search falls short
    #[arg(long, global = true, default_value_t = config::DEFAULT_FALLBACK_LIMIT)]
    fallback_limit: usize,

    /// Stop searching below this depth and score the subtree with a penalty
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Use the exact search below this many answer combinations
    #[arg(long, global = true, default_value_t = config::DEFAULT_EXHAUSTIVE_THRESHOLD)]
    threshold: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay guesses against known answers and recommend the next play
    Solve {
        /// The four answers, comma separated (e.g. BERET,CATTY,PUFFY,SPUNK)
        answers: String,

        /// Guesses played so far, in order
        guesses: Vec<String>,
    },

    /// Recommend the next play from recorded outcomes
    Advise {
        /// Entries like CRANE:..y..,g....,-----,.y..g (----- marks a solved board)
        entries: Vec<String>,
    },

    /// Rank opening guesses by information gain
    Openings {
        /// Number of openings to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Report the combined gain of a two-word opening instead
        #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
        pair: Option<Vec<String>>,
    },

    /// Show how a guess splits the answers
    Analyze {
        /// Words to analyze
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Simulate random games with a fixed opening
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Base random seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Opening guesses played in every game
        #[arg(required = true)]
        opening: Vec<String>,
    },

    /// Show the daily puzzle answers
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Find the next date this word is an answer instead
        #[arg(short, long)]
        find: Option<String>,
    },
}

impl Cli {
    fn recommend_config(&self) -> RecommendConfig {
        RecommendConfig {
            exhaustive_threshold: self.threshold,
            solver: SolverConfig {
                fallback_limit: self.fallback_limit,
                max_depth: self.max_depth,
                ..SolverConfig::default()
            },
            ..RecommendConfig::default()
        }
    }

    fn blacklist_path(&self) -> Option<&Path> {
        self.blacklist.as_deref().or_else(|| {
            let default = Path::new(DEFAULT_BLACKLIST_PATH);
            default.exists().then_some(default)
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let vocab = Vocabulary::load(&cli.wordbank, &cli.allowed, cli.blacklist_path())?;

    match &cli.command {
        Commands::Solve { answers, guesses } => {
            let matrix = build_matrix(&vocab)?;
            let answers: Vec<String> = answers.split(',').map(|a| a.trim().to_string()).collect();
            let game = replay_with_answers(&matrix, &answers, guesses)?;
            report_game(&cli, &game)
        }
        Commands::Advise { entries } => {
            let matrix = build_matrix(&vocab)?;
            let game = replay_history(&matrix, entries)?;
            report_game(&cli, &game)
        }
        Commands::Openings { top, pair } => {
            let matrix = build_matrix(&vocab)?;
            run_openings_command(&matrix, *top, pair.as_deref())
        }
        Commands::Analyze { words } => {
            let matrix = build_matrix(&vocab)?;
            for word in words {
                print_analysis_result(&analyze_word(&matrix, word)?);
            }
            Ok(())
        }
        Commands::Simulate {
            games,
            seed,
            opening,
        } => {
            let matrix = build_matrix(&vocab)?;
            let config = SimulationConfig {
                games: *games,
                seed: *seed,
                ..SimulationConfig::new(opening.clone())
            };
            let report = run_simulation(&matrix, &config)?;
            print_simulation(&report, &matrix, opening);
            Ok(())
        }
        Commands::Daily { date, find } => {
            run_daily_command(&vocab, date.as_deref(), find.as_deref())
        }
    }
}

/// Score every answer against every guess, with a spinner while it runs
fn build_matrix(vocab: &Vocabulary) -> Result<OutcomeMatrix> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!(
        "Scoring {} answers against {} guesses…",
        vocab.answers.len(),
        vocab.guessable.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let matrix = vocab
        .build_matrix()
        .context("failed to build the outcome matrix")?;
    spinner.finish_and_clear();
    Ok(matrix)
}

fn report_game(cli: &Cli, game: &GameReplay<'_>) -> Result<()> {
    print_replay(game);
    if cli.verbose {
        println!();
        print_history(game);
    }

    let recommendation = recommend(game, &cli.recommend_config())?;
    print_recommendation(&recommendation, game.matrix(), game.steps().len(), cli.verbose);
    Ok(())
}

fn run_openings_command(matrix: &OutcomeMatrix, top: usize, pair: Option<&[String]>) -> Result<()> {
    if let Some([first, second]) = pair {
        let report = opening_pair(matrix, first, second)?;
        print_pair(&report, matrix);
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Ranking {} openings…", matrix.guess_count()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let report = rank_openings(matrix, top);
    spinner.finish_and_clear();

    print_openings(&report, matrix);
    Ok(())
}

fn run_daily_command(vocab: &Vocabulary, date: Option<&str>, find: Option<&str>) -> Result<()> {
    let date = date
        .map(parse_date)
        .transpose()
        .context("invalid --date")?;

    if let Some(word) = find {
        let found = find_next_appearance(vocab, word, date)?;
        print_next_appearance(word, found);
    } else {
        print_daily(&daily_answers(vocab, date)?);
    }
    Ok(())
}
