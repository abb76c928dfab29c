//! Five-letter words
//!
//! Input is upper-cased once, at construction. Everything downstream
//! compares raw bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Letters of the Latin alphabet
pub(crate) const ALPHABET_SIZE: usize = 26;

/// An upper-case five-letter word
///
/// Ordering and equality follow the normalized text, so `crane` and `CRANE`
/// are the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Why a string was rejected as a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected {WORD_LENGTH} letters, found {0}")]
    WrongLength(usize),
    #[error("'{0}' is not an ASCII letter")]
    NotALetter(char),
}

impl Word {
    /// Parse and normalize a word
    ///
    /// Surrounding whitespace is not stripped; callers reading lines trim first.
    ///
    /// # Errors
    /// `WrongLength` when the input is not five characters long,
    /// `NotALetter` on the first character outside `A-Z`/`a-z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("Slate").unwrap().text(), "SLATE");
    /// assert_eq!(Word::new("sla7e"), Err(WordError::NotALetter('7')));
    /// assert_eq!(Word::new(" slate"), Err(WordError::WrongLength(6)));
    /// ```
    pub fn new(input: impl AsRef<str>) -> Result<Self, WordError> {
        let input = input.as_ref();

        let count = input.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::WrongLength(count));
        }
        if let Some(bad) = input.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NotALetter(bad));
        }

        let text = input.to_ascii_uppercase();
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Upper-case letters in position order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position` (panics past the last position)
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Occurrences of each letter, indexed `A` = 0 through `Z` = 25
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.letters {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
