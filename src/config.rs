//! Runtime configuration
//!
//! Plain values built once (by the CLI or an embedding application) and passed
//! explicitly to the components that need them.

use crate::core::{Word, WordError};
use std::path::PathBuf;

/// Maximum number of guesses in one game
pub const MAX_GUESSES: usize = 6;

/// Opening word used by the solver when no guess has been made yet
pub const DEFAULT_OPENING: &str = "CRANE";

/// Where the guess and solution dictionaries come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordListSource {
    /// The lists compiled into the binary
    #[default]
    Embedded,
    /// Line-oriented files, one word per line
    Files {
        guesses: PathBuf,
        solutions: PathBuf,
    },
}

impl WordListSource {
    /// Files when both paths are given, otherwise the embedded lists
    ///
    /// Returns `None` if only one of the two paths is given.
    #[must_use]
    pub fn from_paths(guesses: Option<PathBuf>, solutions: Option<PathBuf>) -> Option<Self> {
        match (guesses, solutions) {
            (None, None) => Some(Self::Embedded),
            (Some(guesses), Some(solutions)) => Some(Self::Files { guesses, solutions }),
            _ => None,
        }
    }
}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// First guess the solver makes on an empty history
    pub opening: Word,
    /// Guesses played automatically before the player (or solver) takes over
    pub initial_guesses: Vec<Word>,
}

impl GameConfig {
    /// Replace the opening word
    ///
    /// # Errors
    /// Returns `WordError` if `opening` is not a well-formed word.
    pub fn with_opening(mut self, opening: &str) -> Result<Self, WordError> {
        self.opening = Word::new(opening.trim())?;
        Ok(self)
    }

    /// Set the initial guesses
    ///
    /// # Errors
    /// Returns `WordError` for the first malformed guess.
    pub fn with_initial_guesses<S: AsRef<str>>(mut self, guesses: &[S]) -> Result<Self, WordError> {
        self.initial_guesses = guesses
            .iter()
            .map(|guess| Word::new(guess.as_ref().trim()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            opening: Word::new(DEFAULT_OPENING).expect("DEFAULT_OPENING is a valid word"),
            initial_guesses: Vec::new(),
        }
    }
}
