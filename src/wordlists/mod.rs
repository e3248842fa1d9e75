//! Word lists for Quordle solving
//!
//! Vocabularies are read from newline-separated files at startup.

pub mod loader;

use crate::core::Word;
use crate::error::Result;
use crate::matrix::OutcomeMatrix;
use std::path::Path;

/// Default location of the answer list
pub const DEFAULT_ANSWERS_PATH: &str = "words/wordbank.txt";

/// Default location of the extra allowed guesses
pub const DEFAULT_ALLOWED_PATH: &str = "words/allowed.txt";

/// Default location of the daily-puzzle blacklist
pub const DEFAULT_BLACKLIST_PATH: &str = "words/blacklist.txt";

/// Answer and guess vocabularies
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Possible answers, in file order
    pub answers: Vec<Word>,
    /// Every guessable word, sorted
    pub guessable: Vec<Word>,
    /// Words never chosen as daily answers
    pub blacklist: Vec<Word>,
}

impl Vocabulary {
    /// Build from in-memory lists
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: &[Word], blacklist: Vec<Word>) -> Self {
        let guessable = loader::merge_guessable(&answers, allowed);
        Self {
            answers,
            guessable,
            blacklist,
        }
    }

    /// Load the answer, allowed and (optional) blacklist files
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or holds an invalid word.
    pub fn load(answers: &Path, allowed: &Path, blacklist: Option<&Path>) -> anyhow::Result<Self> {
        let answers = loader::load_from_file(answers)?;
        let allowed = loader::load_from_file(allowed)?;
        let blacklist = blacklist
            .map(loader::load_from_file)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::new(answers, &allowed, blacklist))
    }

    /// Score every answer against every guessable word
    ///
    /// # Errors
    /// Returns an error if the answer list holds a duplicate.
    pub fn build_matrix(&self) -> Result<OutcomeMatrix> {
        OutcomeMatrix::build(self.answers.clone(), self.guessable.clone())
    }
}
