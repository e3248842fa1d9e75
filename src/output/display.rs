//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, outcome_text, word_list};
use crate::commands::{
    AnalysisResult, DailyAnswers, OpeningReport, PairReport, Recommendation, SimulationReport,
};
use crate::game::daily::DEFAULT_HORIZON_DAYS;
use crate::game::{Board, GameReplay};
use crate::matrix::OutcomeMatrix;
use crate::solver::SearchStats;
use chrono::NaiveDate;
use colored::Colorize;

/// Boards with at most this many candidates are listed in full
const LIST_LIMIT: usize = 10;

/// Print one line per replayed guess, then what is known about each board
pub fn print_replay(game: &GameReplay<'_>) {
    let matrix = game.matrix();

    for step in game.steps() {
        let guess = matrix.guess_word(step.guess);
        let outcomes: Vec<String> = step
            .outcomes
            .iter()
            .map(|&o| colored_guess(guess, o))
            .collect();
        let counts: Vec<String> = step.counts.iter().map(ToString::to_string).collect();
        println!(
            "{} {} -> [{}] = {} {}",
            guess.text().bold(),
            outcomes.join("  "),
            counts.join(", "),
            step.combinations,
            format!("+{:.2} bits", step.bits_gained).bright_cyan()
        );
    }

    for (i, board) in game.boards().iter().enumerate() {
        match board {
            Board::Solved(solution) => {
                println!("Board {i} solved: {}", matrix.solution_word(*solution).text().green());
            }
            Board::Pending(candidates) if candidates.len() == 1 => {
                println!(
                    "Board {i} must be {}",
                    matrix.solution_word(candidates[0]).text().bright_yellow().bold()
                );
            }
            Board::Pending(candidates) if candidates.len() <= LIST_LIMIT => {
                let words = candidates.iter().map(|&s| matrix.solution_word(s));
                println!("Board {i} is one of {}", word_list(words, LIST_LIMIT));
            }
            Board::Pending(candidates) => {
                println!("Board {i}: {} candidates", candidates.len());
            }
        }
    }
}

/// Print a recommendation
pub fn print_recommendation(
    recommendation: &Recommendation,
    matrix: &OutcomeMatrix,
    guesses_played: usize,
    verbose: bool,
) {
    match recommendation {
        Recommendation::Won => {
            println!(
                "\n{}",
                format!("✅ Solved in {guesses_played} guesses!").green().bold()
            );
        }
        Recommendation::Exhaustive {
            state,
            solution,
            alternatives,
        } => {
            if verbose {
                println!("\nAll possibilities:");
                for (i, words) in state.describe(matrix).iter().enumerate() {
                    println!("  {i}: {}", words.join(", "));
                }
            }

            println!("\n{}", "Best play by expected number of steps to complete:".bright_cyan().bold());
            if let Some(word) = solution.word(matrix) {
                println!(
                    "  +{:.2} {} ({:.2} total)",
                    solution.expected_plays,
                    word.text().bright_yellow().bold(),
                    solution.expected_plays + guesses_played as f64
                );
            }

            if verbose {
                println!("\nAlternatives:");
                for mv in alternatives {
                    let marker = if mv.solves_board { "*" } else { " " };
                    println!(
                        "  {marker} {} -> +{:.3} plays, {:.2} bits",
                        mv.word.text(),
                        mv.expected_plays,
                        mv.information_gain
                    );
                }
                print_search_stats(&solution.stats);
            }
        }
        Recommendation::InformationGain { ranked } => {
            println!(
                "\n{}",
                "Best next plays based on expected information gain:".bright_cyan().bold()
            );
            for r in ranked {
                println!(
                    "  {} -> {}",
                    matrix.guess_word(r.guess).text().bright_yellow(),
                    format!("+{:.2} bits", r.information_gain).green()
                );
            }
        }
    }
}

/// Print solver diagnostics
pub fn print_search_stats(stats: &SearchStats) {
    println!("\n{}", "Search statistics:".bright_black());
    println!("  Nodes visited:     {}", stats.nodes);
    println!("  Max depth:         {}", stats.max_depth);
    println!("  Early exits:       {}", stats.bound_exits);
    println!("  Fallback searches: {}", stats.fallbacks);
    println!("  Pruned guesses:    {}", stats.pruned);
    if stats.depth_cutoffs > 0 {
        println!(
            "  Depth cut-offs:    {}",
            stats.depth_cutoffs.to_string().yellow()
        );
    }
}

/// Print the result of a guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_bits = (result.total_candidates.max(1) as f64).log2();
    let bar = create_progress_bar(result.metrics.information_gain, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Info gain:   [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.information_gain).bright_yellow()
    );
    println!("   Groups:      {}", result.metrics.group_count);
    println!("   Largest:     {}", result.metrics.max_group);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );

    if !result.small_groups.is_empty() {
        println!("\n🔎 {}", "Small groups:".bright_cyan().bold());
        for (outcome, words) in &result.small_groups {
            println!("   {outcome}: {}", word_list(words, LIST_LIMIT));
        }
    }

    println!("\n📈 {}", "Words by group size:".bright_cyan().bold());
    for (size, count) in &result.size_histogram {
        println!("   {size:>2}: {count}");
    }
}

/// Print the best and worst openings
pub fn print_openings(report: &OpeningReport, matrix: &OutcomeMatrix) {
    let max = report.best.first().map_or(1.0, |r| r.information_gain);

    println!("\n{}", "Best openings:".bright_cyan().bold());
    for r in &report.best {
        println!(
            "  {} [{}] {:.3} bits",
            matrix.guess_word(r.guess).text().bright_yellow(),
            create_progress_bar(r.information_gain, max, 20).green(),
            r.information_gain
        );
    }

    println!("\n{}", "Worst openings:".bright_cyan().bold());
    for r in &report.worst {
        println!(
            "  {} {:.3} bits",
            matrix.guess_word(r.guess).text().bright_black(),
            r.information_gain
        );
    }
    println!("\n{} guesses ranked", report.total_guesses);
}

/// Print the gain of a two-word opening
pub fn print_pair(report: &PairReport, matrix: &OutcomeMatrix) {
    let first = matrix.guess_word(report.first).text();
    let second = matrix.guess_word(report.second).text();
    println!(
        "{first} alone: {:.3} bits; {first} + {second}: {} per board",
        report.first_gain,
        format!("{:.3} bits", report.pair_gain).bright_yellow().bold()
    );
}

/// Print simulation results
pub fn print_simulation(report: &SimulationReport, matrix: &OutcomeMatrix, opening: &[String]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION:".bright_cyan().bold(),
        opening.join(" / ").to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Games:        {}", report.games);
    println!(
        "   Determined:   {} ({})",
        report.determined,
        format!("{:.1}%", report.determined_fraction() * 100.0).green()
    );

    if !report.best_next.is_empty() {
        println!("\n📈 {}", "Best next plays:".bright_cyan().bold());
        for &(guess, count) in report.best_next.iter().take(LIST_LIMIT) {
            let pct = count as f64 / report.games.max(1) as f64 * 100.0;
            println!(
                "   {} {:5.1}% {}",
                matrix.guess_word(guess).text(),
                pct,
                create_progress_bar(pct, 100.0, 30).green()
            );
        }
    }
}

/// Print a day's answers
pub fn print_daily(answers: &DailyAnswers) {
    let words: Vec<String> = answers
        .words
        .iter()
        .map(|w| w.text().bright_yellow().bold().to_string())
        .collect();
    println!(
        "{} (puzzle {}): {}",
        answers.date,
        answers.seed,
        words.join("  ")
    );
}

/// Print where a word next appears
pub fn print_next_appearance(word: &str, found: Option<NaiveDate>) {
    let word = word.to_uppercase();
    match found {
        Some(date) => println!(
            "{} is next an answer on {}",
            word.bright_yellow(),
            date.to_string().green()
        ),
        None => println!(
            "{} is not an answer within {DEFAULT_HORIZON_DAYS} days",
            word.bright_yellow()
        ),
    }
}

/// Print recorded outcomes as `GUESS:o1,o2,...` entries
pub fn print_history(game: &GameReplay<'_>) {
    for step in game.steps() {
        let outcomes: Vec<String> = step.outcomes.iter().map(|&o| outcome_text(o)).collect();
        println!(
            "{}:{}",
            game.matrix().guess_word(step.guess).text(),
            outcomes.join(",")
        );
    }
}
