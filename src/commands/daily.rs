//! Daily puzzle command

use crate::core::Word;
use crate::game::DailyPuzzle;
use crate::game::daily::{DEFAULT_HORIZON_DAYS, puzzle_seed, today};
use crate::wordlists::Vocabulary;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// The answers for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAnswers {
    pub date: NaiveDate,
    pub seed: u32,
    pub words: [Word; 4],
}

fn puzzle(vocab: &Vocabulary) -> DailyPuzzle {
    DailyPuzzle::new(vocab.answers.clone(), vocab.blacklist.iter().cloned())
}

/// Answers for `date` (today when `None`)
///
/// # Errors
///
/// Returns an error if the date precedes the first puzzle or the word bank is
/// too small.
pub fn daily_answers(vocab: &Vocabulary, date: Option<NaiveDate>) -> Result<DailyAnswers> {
    let date = date.unwrap_or_else(today);
    let words = puzzle(vocab)
        .words_for_date(date)
        .with_context(|| format!("cannot generate answers for {date}"))?;
    Ok(DailyAnswers {
        date,
        seed: puzzle_seed(date)?,
        words,
    })
}

/// Next date on or after `from` whose answers include `word`
///
/// # Errors
///
/// Returns an error if the word is invalid or answers cannot be generated.
pub fn find_next_appearance(
    vocab: &Vocabulary,
    word: &str,
    from: Option<NaiveDate>,
) -> Result<Option<NaiveDate>> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;
    let from = from.unwrap_or_else(today);
    Ok(puzzle(vocab).next_appearance(&word, from, DEFAULT_HORIZON_DAYS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::daily::{launch_date, parse_date};
    use crate::wordlists::loader::words_from_slice;

    fn vocab() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["BERET", "BERTH", "CATTY", "EGRET", "ETHER", "EXERT", "PUFFY", "SPUNK"]),
            &[],
            words_from_slice(&["CATTY"]),
        )
    }

    #[test]
    fn answers_for_a_known_date() {
        let date = parse_date("2022-02-24").unwrap();
        let answers = daily_answers(&vocab(), Some(date)).unwrap();
        assert_eq!(answers.seed, 31);
        let texts: Vec<&str> = answers.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["BERTH", "EGRET", "EXERT", "PUFFY"]);
    }

    #[test]
    fn find_word_from_launch() {
        let found = find_next_appearance(&vocab(), "beret", Some(launch_date())).unwrap();
        assert_eq!(found, Some(launch_date()));
        assert!(find_next_appearance(&vocab(), "be", None).is_err());
    }

    #[test]
    fn rejects_dates_before_launch() {
        let date = parse_date("2021-06-01").unwrap();
        assert!(daily_answers(&vocab(), Some(date)).is_err());
    }
}
