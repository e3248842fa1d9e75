//! Dense outcome lookup table
//!
//! Every (solution, guess) pair is scored once up front; the solver and the
//! entropy evaluator only ever read from the table afterwards.

mod partition;

pub use partition::partition_by_key;

use crate::core::{Outcome, Word};
use crate::error::{Error, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Precomputed outcome of every guessable word against every solution
///
/// Rows are solutions, columns are guesses. The table is immutable once built
/// and is `Sync`, so it can be shared by reference across worker threads.
#[derive(Debug, Clone)]
pub struct OutcomeMatrix {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    solution_index: FxHashMap<Word, usize>,
    guess_index: FxHashMap<Word, usize>,
    /// Column of each solution in the guess vocabulary
    solution_columns: Vec<usize>,
    outcomes: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Build the table, scoring rows in parallel
    ///
    /// # Errors
    /// Returns an error if either vocabulary contains a duplicate word or a
    /// solution word is missing from the guessable vocabulary.
    ///
    /// # Examples
    /// ```
    /// use quordle_solver::core::Word;
    /// use quordle_solver::matrix::OutcomeMatrix;
    ///
    /// let words: Vec<Word> = ["BERET", "EGRET", "CATTY"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let matrix = OutcomeMatrix::build(words.clone(), words).unwrap();
    ///
    /// let beret = matrix.solution_index("BERET").unwrap();
    /// let egret = matrix.guess_index("EGRET").unwrap();
    /// assert_eq!(matrix.lookup(beret, egret).to_string(), "y.ggg");
    /// ```
    pub fn build(solutions: Vec<Word>, guesses: Vec<Word>) -> Result<Self> {
        let solution_index = index_words(&solutions)?;
        let guess_index = index_words(&guesses)?;

        let solution_columns = solutions
            .iter()
            .map(|word| {
                guess_index
                    .get(word)
                    .copied()
                    .ok_or_else(|| Error::UnknownGuess(word.text().to_string()))
            })
            .collect::<Result<Vec<usize>>>()?;

        let width = guesses.len();
        let mut outcomes = vec![Outcome::ALL_ABSENT; solutions.len() * width];
        if width > 0 {
            outcomes
                .par_chunks_mut(width)
                .zip(solutions.par_iter())
                .for_each(|(row, solution)| {
                    for (cell, guess) in row.iter_mut().zip(&guesses) {
                        *cell = Outcome::calculate(solution, guess);
                    }
                });
        }

        Ok(Self {
            solutions,
            guesses,
            solution_index,
            guess_index,
            solution_columns,
            outcomes,
        })
    }

    /// Outcome of playing guess `guess` when the answer is solution `solution`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn lookup(&self, solution: usize, guess: usize) -> Outcome {
        debug_assert!(guess < self.guesses.len(), "guess index out of range");
        self.outcomes[solution * self.guesses.len() + guess]
    }

    #[inline]
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn solution_word(&self, solution: usize) -> &Word {
        &self.solutions[solution]
    }

    #[inline]
    #[must_use]
    pub fn guess_word(&self, guess: usize) -> &Word {
        &self.guesses[guess]
    }

    /// Column of a solution word when it is played as a guess
    #[inline]
    #[must_use]
    pub fn guess_index_of_solution(&self, solution: usize) -> usize {
        self.solution_columns[solution]
    }

    /// Row index of a solution word
    ///
    /// # Errors
    /// Returns `UnknownSolution` if the word is invalid or not a solution.
    pub fn solution_index(&self, word: &str) -> Result<usize> {
        let parsed = Word::new(word)?;
        self.solution_index
            .get(&parsed)
            .copied()
            .ok_or_else(|| Error::UnknownSolution(parsed.text().to_string()))
    }

    /// Column index of a guessable word
    ///
    /// # Errors
    /// Returns `UnknownGuess` if the word is invalid or not guessable.
    pub fn guess_index(&self, word: &str) -> Result<usize> {
        let parsed = Word::new(word)?;
        self.guess_index
            .get(&parsed)
            .copied()
            .ok_or_else(|| Error::UnknownGuess(parsed.text().to_string()))
    }

    /// Keep the candidates that would have produced `outcome` for `guess`
    #[must_use]
    pub fn filter(&self, candidates: &[usize], guess: usize, outcome: Outcome) -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&solution| self.lookup(solution, guess) == outcome)
            .collect()
    }

    /// Group candidates by the outcome `guess` would produce
    #[must_use]
    pub fn partition(&self, candidates: &[usize], guess: usize) -> Vec<(Outcome, Vec<usize>)> {
        partition_by_key(candidates.iter().copied(), |&solution| {
            self.lookup(solution, guess)
        })
    }

    /// Every solution index, in vocabulary order
    #[must_use]
    pub fn all_solutions(&self) -> Vec<usize> {
        (0..self.solutions.len()).collect()
    }

    /// Every guess index, in vocabulary order
    #[must_use]
    pub fn all_guesses(&self) -> Vec<usize> {
        (0..self.guesses.len()).collect()
    }
}

fn index_words(words: &[Word]) -> Result<FxHashMap<Word, usize>> {
    let mut index = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        if index.insert(word.clone(), i).is_some() {
            return Err(Error::DuplicateWord(word.text().to_string()));
        }
    }
    Ok(index)
}

/// Build a table from string slices, mostly for tests and examples
///
/// # Errors
/// Returns an error if any word is invalid or the vocabularies are inconsistent.
pub fn matrix_from_strs(solutions: &[&str], guesses: &[&str]) -> Result<OutcomeMatrix> {
    let parse = |words: &[&str]| {
        words
            .iter()
            .map(|w| Word::new(*w).map_err(Error::from))
            .collect::<Result<Vec<Word>>>()
    };
    OutcomeMatrix::build(parse(solutions)?, parse(guesses)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTIONS: &[&str] = &["BERET", "BERTH", "EGRET", "CATTY"];
    const GUESSES: &[&str] = &["BERET", "BERTH", "CATTY", "EGRET", "ZOOMS"];

    fn matrix() -> OutcomeMatrix {
        matrix_from_strs(SOLUTIONS, GUESSES).unwrap()
    }

    #[test]
    fn dimensions() {
        let m = matrix();
        assert_eq!(m.solution_count(), 4);
        assert_eq!(m.guess_count(), 5);
    }

    #[test]
    fn lookup_matches_direct_classification() {
        let m = matrix();
        for (s, solution) in m.solutions().iter().enumerate() {
            for (g, guess) in m.guesses().iter().enumerate() {
                assert_eq!(m.lookup(s, g), Outcome::calculate(solution, guess));
            }
        }
    }

    #[test]
    fn diagonal_is_all_correct() {
        let m = matrix();
        for s in 0..m.solution_count() {
            let column = m.guess_index_of_solution(s);
            assert_eq!(m.guess_word(column), m.solution_word(s));
            assert!(m.lookup(s, column).is_all_correct());
        }
    }

    #[test]
    fn index_lookup_is_case_insensitive() {
        let m = matrix();
        assert_eq!(m.solution_index("egret").unwrap(), 2);
        assert_eq!(m.guess_index("zooms").unwrap(), 4);
        assert_eq!(
            m.solution_index("ZOOMS"),
            Err(Error::UnknownSolution("ZOOMS".to_string()))
        );
        assert!(matches!(m.guess_index("QUIRK"), Err(Error::UnknownGuess(_))));
        assert!(matches!(m.guess_index("QU"), Err(Error::Word(_))));
    }

    #[test]
    fn build_rejects_solution_missing_from_guesses() {
        let result = matrix_from_strs(&["BERET", "PUFFY"], &["BERET"]);
        assert_eq!(result.unwrap_err(), Error::UnknownGuess("PUFFY".to_string()));
    }

    #[test]
    fn build_rejects_duplicates() {
        let result = matrix_from_strs(&["BERET", "BERET"], &["BERET"]);
        assert_eq!(result.unwrap_err(), Error::DuplicateWord("BERET".to_string()));
    }

    #[test]
    fn filter_keeps_consistent_candidates() {
        let m = matrix();
        let catty = m.guess_index("CATTY").unwrap();
        let berth = m.solution_index("BERTH").unwrap();
        let all = m.all_solutions();

        let observed = m.lookup(berth, catty);
        assert_eq!(m.filter(&all, catty, observed), vec![berth]);

        let beret = m.solution_index("BERET").unwrap();
        let egret = m.solution_index("EGRET").unwrap();
        let observed = m.lookup(beret, catty);
        assert_eq!(m.filter(&all, catty, observed), vec![beret, egret]);
    }

    #[test]
    fn partition_covers_candidates() {
        let m = matrix();
        let zooms = m.guess_index("ZOOMS").unwrap();
        let groups = m.partition(&m.all_solutions(), zooms);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Outcome::ALL_ABSENT);
        assert_eq!(groups[0].1.len(), 4);
    }
}
