//! Formatting utilities for terminal output

use crate::core::{Mark, Outcome, Word};
use crate::game::SOLVED_MARKER;
use colored::Colorize;

/// Render a guess with its letters coloured by outcome
///
/// Solved boards (`None`) show the solved marker instead.
#[must_use]
pub fn colored_guess(guess: &Word, outcome: Option<Outcome>) -> String {
    let Some(outcome) = outcome else {
        return SOLVED_MARKER.bright_black().to_string();
    };

    guess
        .text()
        .chars()
        .zip(outcome.marks())
        .map(|(letter, mark)| {
            let letter = letter.to_string();
            match mark {
                Mark::Correct => letter.black().on_green().to_string(),
                Mark::Displaced => letter.black().on_yellow().to_string(),
                Mark::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Plain `g`/`y`/`.` form, or the solved marker
#[must_use]
pub fn outcome_text(outcome: Option<Outcome>) -> String {
    outcome.map_or_else(|| SOLVED_MARKER.to_string(), |o| o.to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comma-separated words, cut off after `limit` with a count of the rest
#[must_use]
pub fn word_list<'w>(words: impl IntoIterator<Item = &'w Word>, limit: usize) -> String {
    let words: Vec<&str> = words.into_iter().map(Word::text).collect();
    if words.len() <= limit {
        return words.join(", ");
    }
    format!("{}, … ({} more)", words[..limit].join(", "), words.len() - limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_text_forms() {
        assert_eq!(outcome_text(None), "-----");
        assert_eq!(outcome_text(Some(Outcome::ALL_CORRECT)), "ggggg");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("catty").unwrap();
        assert_eq!(colored_guess(&word, Some(Outcome::ALL_ABSENT)), "CATTY");
        assert_eq!(colored_guess(&word, None), "-----");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn word_list_truncates() {
        let words: Vec<Word> = ["BERET", "BERTH", "CATTY"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        assert_eq!(word_list(&words, 5), "BERET, BERTH, CATTY");
        assert_eq!(word_list(&words, 2), "BERET, BERTH, … (1 more)");
    }
}
