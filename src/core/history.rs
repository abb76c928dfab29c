//! Ordered record of guesses and the feedback each one received

use super::feedback::{Feedback, FeedbackError};
use super::word::{Word, WordError};
use thiserror::Error;

/// Error type for histories built from raw guess/feedback lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("{guesses} guesses but {feedback} feedback entries")]
    LengthMismatch { guesses: usize, feedback: usize },
    #[error("guess {index}: {source}")]
    Guess {
        index: usize,
        #[source]
        source: WordError,
    },
    #[error("feedback {index}: {source}")]
    Feedback {
        index: usize,
        #[source]
        source: FeedbackError,
    },
}

/// Append-only list of (guess, feedback) pairs for one game
///
/// Insertion order is preserved; the most recent entry is [`GuessHistory::last`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    entries: Vec<(Word, Feedback)>,
}

impl GuessHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a history from parallel lists of guesses and wire feedback
    ///
    /// Entries are trimmed before parsing.
    ///
    /// # Errors
    /// Returns `HistoryError` if the lists differ in length or any entry fails to parse.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::GuessHistory;
    ///
    /// let history = GuessHistory::from_wire(&["CRANE"], &["WWCWC"]).unwrap();
    /// assert_eq!(history.len(), 1);
    ///
    /// assert!(GuessHistory::from_wire(&["CRANE", "SLATE"], &["WWCWC"]).is_err());
    /// ```
    pub fn from_wire<G, F>(guesses: &[G], feedback: &[F]) -> Result<Self, HistoryError>
    where
        G: AsRef<str>,
        F: AsRef<str>,
    {
        if guesses.len() != feedback.len() {
            return Err(HistoryError::LengthMismatch {
                guesses: guesses.len(),
                feedback: feedback.len(),
            });
        }

        let entries = guesses
            .iter()
            .zip(feedback)
            .enumerate()
            .map(|(index, (guess, fb))| {
                let word = Word::new(guess.as_ref().trim())
                    .map_err(|source| HistoryError::Guess { index, source })?;
                let fb = Feedback::parse(fb.as_ref())
                    .map_err(|source| HistoryError::Feedback { index, source })?;
                Ok((word, fb))
            })
            .collect::<Result<Vec<_>, HistoryError>>()?;

        Ok(Self { entries })
    }

    /// Append a scored guess
    pub fn push(&mut self, guess: Word, feedback: Feedback) {
        self.entries.push((guess, feedback));
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<(Word, Feedback)> {
        self.entries.pop()
    }

    /// The most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&(Word, Feedback)> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` has already been guessed
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.entries.iter().any(|(guess, _)| guess == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Word, Feedback)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, Feedback)] {
        &self.entries
    }
}

impl From<Vec<(Word, Feedback)>> for GuessHistory {
    fn from(entries: Vec<(Word, Feedback)>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(Word, Feedback)> for GuessHistory {
    fn from_iter<I: IntoIterator<Item = (Word, Feedback)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a (Word, Feedback);
    type IntoIter = std::slice::Iter<'a, (Word, Feedback)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
