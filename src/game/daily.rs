//! Daily puzzle answers
//!
//! The day's four answers come from an MT19937 generator seeded with the
//! number of days since the first puzzle. Four warm-up draws are discarded,
//! then groups of four are drawn until one has four distinct words with none
//! on the blacklist.

use crate::core::Word;
use crate::error::{Error, Result};
use chrono::{Days, NaiveDate, Utc};
use itertools::Itertools;
use rand::RngCore;
use rustc_hash::FxHashSet;

const STATE_SIZE: usize = 624;
const SHIFT_SIZE: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Accepted date format
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Draws discarded after seeding
const WARM_UP_DRAWS: usize = 4;

/// Days scanned by [`DailyPuzzle::next_appearance`] by default
pub const DEFAULT_HORIZON_DAYS: u32 = 3650;

/// 32-bit Mersenne Twister (MT19937)
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; STATE_SIZE],
    index: usize,
}

impl MersenneTwister {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; STATE_SIZE];
        state[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            state,
            index: STATE_SIZE,
        }
    }

    fn twist(&mut self) {
        for i in 0..STATE_SIZE {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % STATE_SIZE] & LOWER_MASK);
            let mut shifted = x >> 1;
            if x & 1 != 0 {
                shifted ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + SHIFT_SIZE) % STATE_SIZE] ^ shifted;
        }
        self.index = 0;
    }

    /// A non-negative 31-bit value, the top 31 bits of the next output
    pub fn rand_int31(&mut self) -> u32 {
        self.next_u32() >> 1
    }
}

impl RngCore for MersenneTwister {
    fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_SIZE {
            self.twist();
        }

        let mut y = self.state[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;

        self.index += 1;
        y
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Date of the first daily puzzle
#[must_use]
pub fn launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 24).unwrap_or(NaiveDate::MIN)
}

/// Today's date in UTC
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `InvalidDate` if the text is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Generator seed: days elapsed since the first puzzle
///
/// # Errors
/// Returns `DateBeforeLaunch` for dates before the first puzzle.
pub fn puzzle_seed(date: NaiveDate) -> Result<u32> {
    let elapsed = date.signed_duration_since(launch_date()).num_days();
    u32::try_from(elapsed).map_err(|_| Error::DateBeforeLaunch(date.to_string()))
}

/// Draw the four answers for a generator seed
///
/// # Errors
/// Returns `NotEnoughWords` when fewer than four distinct words are eligible.
pub fn generate_words(seed: u32, wordbank: &[Word], blacklist: &FxHashSet<Word>) -> Result<[Word; 4]> {
    let eligible = wordbank
        .iter()
        .filter(|w| !blacklist.contains(*w))
        .collect::<FxHashSet<_>>()
        .len();
    if eligible < 4 {
        return Err(Error::NotEnoughWords(eligible));
    }

    let mut twister = MersenneTwister::new(seed);
    for _ in 0..WARM_UP_DRAWS {
        twister.rand_int31();
    }

    loop {
        let draw: [&Word; 4] =
            std::array::from_fn(|_| &wordbank[twister.rand_int31() as usize % wordbank.len()]);

        let distinct = draw.iter().tuple_combinations().all(|(a, b)| a != b);
        if distinct && !draw.iter().any(|w| blacklist.contains(*w)) {
            return Ok(draw.map(Word::clone));
        }
    }
}

/// The daily puzzle generator over a fixed word bank
#[derive(Debug, Clone)]
pub struct DailyPuzzle {
    wordbank: Vec<Word>,
    blacklist: FxHashSet<Word>,
}

impl DailyPuzzle {
    #[must_use]
    pub fn new(wordbank: Vec<Word>, blacklist: impl IntoIterator<Item = Word>) -> Self {
        Self {
            wordbank,
            blacklist: blacklist.into_iter().collect(),
        }
    }

    /// The four answers for `date`
    ///
    /// # Errors
    /// Returns an error for dates before the first puzzle or a word bank
    /// with fewer than four eligible words.
    pub fn words_for_date(&self, date: NaiveDate) -> Result<[Word; 4]> {
        generate_words(puzzle_seed(date)?, &self.wordbank, &self.blacklist)
    }

    /// First date on or after `from`, within `horizon` days, whose answers
    /// include `word`
    ///
    /// # Errors
    /// Returns an error if a date's answers cannot be generated.
    pub fn next_appearance(
        &self,
        word: &Word,
        from: NaiveDate,
        horizon: u32,
    ) -> Result<Option<NaiveDate>> {
        let from = from.max(launch_date());
        for offset in 0..=u64::from(horizon) {
            let Some(date) = from.checked_add_days(Days::new(offset)) else {
                break;
            };
            if self.words_for_date(date)?.contains(word) {
                return Ok(Some(date));
            }
        }
        Ok(None)
    }
}
