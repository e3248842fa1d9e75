//! Word list loading utilities

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a newline-separated file
///
/// Blank lines are skipped. Words keep their file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid word.
///
/// # Examples
/// ```no_run
/// use quordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/wordbank.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    parse_words(&content).with_context(|| format!("invalid word list {}", path.display()))
}

/// Parse newline-separated words, naming the first bad line
///
/// # Errors
///
/// Returns an error for the first line that is not a valid word.
pub fn parse_words(content: &str) -> Result<Vec<Word>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            Word::new(line).with_context(|| format!("line {number}: {line:?} is not a word"))
        })
        .collect()
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use quordle_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["beret", "toolong", "catty"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "BERET");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Sorted, de-duplicated union of the answers and the allowed guesses
#[must_use]
pub fn merge_guessable(answers: &[Word], allowed: &[Word]) -> Vec<Word> {
    let mut guessable: Vec<Word> = answers.iter().chain(allowed).cloned().collect();
    guessable.sort_unstable();
    guessable.dedup();
    guessable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_words("beret\n\n  catty  \r\nEGRET\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["BERET", "CATTY", "EGRET"]);
    }

    #[test]
    fn parse_names_the_bad_line() {
        let err = parse_words("beret\ncatty\ntoolong\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn merge_sorts_and_dedups() {
        let answers = words_from_slice(&["catty", "beret"]);
        let allowed = words_from_slice(&["zooms", "beret", "aahed"]);
        let merged = merge_guessable(&answers, &allowed);
        let texts: Vec<&str> = merged.iter().map(Word::text).collect();
        assert_eq!(texts, ["AAHED", "BERET", "CATTY", "ZOOMS"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("no/such/list.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/list.txt"), "{err}");
    }
}
