//! Word lists for Wordle
//!
//! Two independent lists: the guess dictionary (every word accepted as input)
//! and the solution dictionary (words that may be chosen as the hidden word).
//! Both are loaded once and shared read-only.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::config::WordListSource;
use crate::core::Word;
use loader::{LoadError, load_from_file, words_from_slice};
use rustc_hash::FxHashSet;

/// Check whether raw input is an acceptable guess
///
/// True iff the input has exactly `WORD_LENGTH` characters, all of them
/// letters, and its upper-cased form is in the guess dictionary.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::wordlists::is_valid;
///
/// let dictionary = vec![Word::new("CRANE").unwrap()];
/// assert!(is_valid("crane", &dictionary));
/// assert!(!is_valid("ab1de", &dictionary));
/// assert!(!is_valid("toolong5", &dictionary));
/// assert!(!is_valid(" crane ", &dictionary));
/// ```
#[must_use]
pub fn is_valid(raw: &str, guess_dictionary: &[Word]) -> bool {
    Word::new(raw).is_ok_and(|word| guess_dictionary.contains(&word))
}

/// The guess and solution dictionaries
///
/// Guess membership checks use a hash set; the lists keep their file order.
#[derive(Debug, Clone)]
pub struct WordLists {
    guesses: Vec<Word>,
    solutions: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl WordLists {
    /// Build word lists from already-validated words
    #[must_use]
    pub fn new(guesses: Vec<Word>, solutions: Vec<Word>) -> Self {
        let accepted = guesses.iter().cloned().collect();
        Self {
            guesses,
            solutions,
            accepted,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(GUESSES), words_from_slice(SOLUTIONS))
    }

    /// Load the lists named by `source`
    ///
    /// # Errors
    /// Returns `LoadError` if a list file cannot be read or holds no valid words.
    pub fn load(source: &WordListSource) -> Result<Self, LoadError> {
        let lists = match source {
            WordListSource::Embedded => Self::embedded(),
            WordListSource::Files { guesses, solutions } => {
                Self::new(load_from_file(guesses)?, load_from_file(solutions)?)
            }
        };

        let outside = lists
            .solutions
            .iter()
            .filter(|w| !lists.accepted.contains(*w))
            .count();
        if outside > 0 {
            log::warn!("{outside} solutions are not in the guess dictionary");
        }

        log::info!(
            "word lists ready: {} guesses, {} solutions",
            lists.guesses.len(),
            lists.solutions.len()
        );
        Ok(lists)
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Look up raw input in the guess dictionary
    ///
    /// Returns the normalized word when [`is_valid`] would accept the input.
    #[must_use]
    pub fn accept(&self, raw: &str) -> Option<Word> {
        Word::new(raw)
            .ok()
            .filter(|word| self.accepted.contains(word))
    }

    /// Hash-backed equivalent of [`is_valid`] against the guess dictionary
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        self.accept(raw).is_some()
    }
}
