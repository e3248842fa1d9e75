//! Outcome classification and its base-4 encoding
//!
//! An outcome records, per slot, how a guess letter scored against a solution:
//! - 0 = Absent (letter not in the remaining solution letters)
//! - 1 = Displaced (letter present elsewhere)
//! - 2 = Correct (letter in the right slot)
//!
//! The five marks are packed most-significant slot first into a base-4 number,
//! so codes fall in `0..1024`. A digit of 3 never occurs.

use super::word::{WORD_LENGTH, Word};
use crate::error::{Error, Result};
use std::fmt;

/// Score of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 0,
    Displaced = 1,
    Correct = 2,
}

impl Mark {
    const fn from_digit(digit: u16) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Displaced),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Absent => '.',
            Self::Displaced => 'y',
            Self::Correct => 'g',
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Displaced => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Encoded outcome of one guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome(u16);

impl Outcome {
    /// Exclusive upper bound of outcome codes (4^5)
    pub const CODE_LIMIT: u16 = 1 << (2 * WORD_LENGTH);

    /// Every slot correct: 2·(4^5 − 1)/3
    pub const ALL_CORRECT: Self = Self(682);

    /// Every slot absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Validate and wrap a raw code
    ///
    /// # Errors
    /// Returns an error if the code is out of range or any base-4 digit is 3.
    pub fn from_code(code: u16) -> Result<Self> {
        if code >= Self::CODE_LIMIT {
            return Err(Error::OutcomeOutOfRange(code));
        }
        let mut rest = code;
        for slot in (0..WORD_LENGTH).rev() {
            if rest % 4 == 3 {
                return Err(Error::InvalidOutcomeDigit { code, slot });
            }
            rest /= 4;
        }
        Ok(Self(code))
    }

    /// Raw code in `0..1024`
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_all_correct(self) -> bool {
        self.0 == Self::ALL_CORRECT.0
    }

    /// Score `guess` against `solution`
    ///
    /// Correct slots are settled first and their letters removed from both
    /// words, so a correctly placed letter can never also satisfy a displaced
    /// match. Remaining guess letters are then scanned left to right, each
    /// consuming one unmatched occurrence from the solution.
    ///
    /// # Examples
    /// ```
    /// use quordle_solver::core::{Mark, Outcome, Word};
    ///
    /// let solution = Word::new("APPLE").unwrap();
    /// let guess = Word::new("PLUMP").unwrap();
    /// let marks = Outcome::classify(&solution, &guess);
    ///
    /// assert_eq!(marks[0], Mark::Displaced);
    /// assert_eq!(marks[3], Mark::Absent);
    /// assert_eq!(Outcome::encode(&marks).to_string(), "yy..y");
    /// ```
    #[must_use]
    pub fn classify(solution: &Word, guess: &Word) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut remaining = solution.letter_counts();
        let solution = solution.letters();
        let guess = guess.letters();

        for (slot, (s, g)) in solution.iter().zip(guess).enumerate() {
            if s == g {
                marks[slot] = Mark::Correct;
                remaining[usize::from(g - b'A')] -= 1;
            }
        }

        for (slot, g) in guess.iter().enumerate() {
            if marks[slot] == Mark::Correct {
                continue;
            }
            let count = &mut remaining[usize::from(g - b'A')];
            if *count > 0 {
                marks[slot] = Mark::Displaced;
                *count -= 1;
            }
        }

        marks
    }

    /// Pack marks into a code, most-significant slot first
    #[must_use]
    pub fn encode(marks: &[Mark; WORD_LENGTH]) -> Self {
        Self(
            marks
                .iter()
                .fold(0u16, |code, &mark| code * 4 + mark as u16),
        )
    }

    /// Unpack a code into marks
    ///
    /// # Errors
    /// Returns an error if the code is out of range or any digit is 3.
    pub fn decode(code: u16) -> Result<[Mark; WORD_LENGTH]> {
        Self::from_code(code).map(Self::marks)
    }

    /// Marks of an already-validated outcome
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut rest = self.0;
        for slot in (0..WORD_LENGTH).rev() {
            // Digits were validated on construction
            marks[slot] = Mark::from_digit(rest % 4).unwrap_or(Mark::Absent);
            rest /= 4;
        }
        marks
    }

    /// Shortcut for `encode(classify(solution, guess))`
    #[must_use]
    pub fn calculate(solution: &Word, guess: &Word) -> Self {
        Self::encode(&Self::classify(solution, guess))
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Correct).count()
    }

    #[must_use]
    pub fn count_displaced(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Displaced).count()
    }

    /// Parse an outcome string such as `"gy..y"` or `"🟩🟨⬜⬜🟨"`
    ///
    /// Accepts:
    /// - 'g'/'G'/🟩 for correct
    /// - 'y'/'Y'/🟨 for displaced
    /// - '.'/'-'/'_'/⬜/⬛ for absent
    ///
    /// # Errors
    /// Returns an error if the string is not exactly five recognised symbols.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidOutcomeString(s.to_string());
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(invalid());
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, symbol) in marks.iter_mut().zip(symbols) {
            *mark = match symbol {
                'g' | 'G' | '🟩' => Mark::Correct,
                'y' | 'Y' | '🟨' => Mark::Displaced,
                '.' | '-' | '_' | '⬜' | '⬛' => Mark::Absent,
                _ => return Err(invalid()),
            };
        }
        Ok(Self::encode(&marks))
    }

    /// Render as square emoji, e.g. "🟩🟨⬜⬜🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks()
            .iter()
            .try_for_each(|m| write!(f, "{}", m.symbol()))
    }
}

impl std::str::FromStr for Outcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<u16> for Outcome {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        Self::from_code(code)
    }
}
