//! Guess selection strategies
//!
//! Defines the Strategy trait, its error type and the runtime-selectable enum.

use super::{EntropyStrategy, OnlyMatchedPatterns};
use crate::core::{Feedback, GuessHistory, Word};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failures a strategy reports instead of guessing
///
/// None of these are normal game outcomes: under honest feedback a strategy
/// always has a word to offer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("strategy needs at least one scored guess")]
    EmptyHistory,
    #[error("no word in the pool scores {feedback} against {guess}; the history is inconsistent")]
    InconsistentHistory { guess: Word, feedback: Feedback },
    #[error("no candidates remain after {guesses} guesses; the history is inconsistent")]
    NoCandidates { guesses: usize },
    #[error(
        "unknown strategy '{0}' (expected one of: {names})",
        names = StrategyType::NAMES.join(", ")
    )]
    UnknownStrategy(String),
}

/// A policy for picking the next guess from a history and a word pool
pub trait Strategy {
    /// Name used on the command line and in statistics
    fn name(&self) -> &'static str;

    /// Pick the next guess from `pool`
    ///
    /// # Errors
    /// Returns `SolverError` when the history leaves nothing to guess.
    fn next_guess<'a, R: Rng + ?Sized>(
        &self,
        history: &GuessHistory,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Random pick among words matching the last feedback (default)
    OnlyMatchedPatterns(OnlyMatchedPatterns),
    /// Maximum Shannon entropy among filtered candidates
    Entropy(EntropyStrategy),
}

impl StrategyType {
    /// Every accepted strategy name
    pub const NAMES: [&'static str; 2] = [OnlyMatchedPatterns::NAME, EntropyStrategy::NAME];
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::OnlyMatchedPatterns(OnlyMatchedPatterns)
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::OnlyMatchedPatterns(s) => s.name(),
            Self::Entropy(s) => s.name(),
        }
    }

    fn next_guess<'a, R: Rng + ?Sized>(
        &self,
        history: &GuessHistory,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        match self {
            Self::OnlyMatchedPatterns(s) => s.next_guess(history, pool, rng),
            Self::Entropy(s) => s.next_guess(history, pool, rng),
        }
    }
}

impl FromStr for StrategyType {
    type Err = SolverError;

    /// Parse a strategy from its name; `-` and `_` are interchangeable
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            OnlyMatchedPatterns::NAME => Ok(Self::OnlyMatchedPatterns(OnlyMatchedPatterns)),
            EntropyStrategy::NAME => Ok(Self::Entropy(EntropyStrategy)),
            _ => Err(SolverError::UnknownStrategy(name.to_string())),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
