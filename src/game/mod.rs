//! One game of Wordle
//!
//! A game owns its solution and history and hands back a `GameOutcome` for
//! whoever keeps statistics.

mod board;
mod stats;

pub use board::LetterBoard;
pub use stats::{ModeSummary, Scoreboard};

use crate::config::GameConfig;
use crate::core::{Feedback, GuessHistory, Word, score};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Rejected guesses
///
/// `Invalid` is the user-correctable case: reprompt and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a valid guess")]
    Invalid(String),
    #[error("the game is already over")]
    GameOver,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a finished game, as recorded by statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub win: bool,
    pub num_guesses: usize,
}

/// A game in progress against a hidden solution
#[derive(Debug, Clone)]
pub struct Game<'a> {
    lists: &'a WordLists,
    solution: Word,
    history: GuessHistory,
    max_guesses: usize,
}

impl<'a> Game<'a> {
    /// Start a game against `solution`
    #[must_use]
    pub const fn new(lists: &'a WordLists, solution: Word, max_guesses: usize) -> Self {
        Self {
            lists,
            solution,
            history: GuessHistory::new(),
            max_guesses,
        }
    }

    /// Start a game with a solution drawn uniformly from the solution list
    ///
    /// Configured initial guesses are played immediately; any that are not in
    /// the guess dictionary are skipped with a warning. Returns `None` if the
    /// solution list is empty.
    pub fn random<R: Rng + ?Sized>(
        lists: &'a WordLists,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<Self> {
        let solution = lists.solutions().choose(rng)?.clone();
        let mut game = Self::new(lists, solution, config.max_guesses);
        game.play_initial_guesses(&config.initial_guesses);
        Some(game)
    }

    /// Submit each of `guesses` in order until the game ends
    pub fn play_initial_guesses(&mut self, guesses: &[Word]) {
        for guess in guesses {
            if self.status() != GameStatus::InProgress {
                break;
            }
            if let Err(e) = self.submit(guess.text()) {
                log::warn!("skipping initial guess {guess}: {e}");
            }
        }
    }

    /// Validate, score and record a guess
    ///
    /// # Errors
    /// Returns `GuessError::Invalid` for input outside the guess dictionary
    /// (the game is unchanged) and `GuessError::GameOver` once the game ended.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        if self.status() != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let guess = self
            .lists
            .accept(raw)
            .ok_or_else(|| GuessError::Invalid(raw.to_string()))?;

        let feedback = score(&guess, &self.solution);
        log::debug!(
            "guess {} of {}: {guess} -> {feedback}",
            self.turn(),
            self.max_guesses
        );
        self.history.push(guess, feedback);
        Ok(feedback)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.history.last() {
            Some((_, feedback)) if feedback.is_perfect() => GameStatus::Won,
            _ if self.history.len() >= self.max_guesses => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// The outcome, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status() {
            GameStatus::InProgress => None,
            status => Some(GameOutcome {
                win: status == GameStatus::Won,
                num_guesses: self.history.len(),
            }),
        }
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Number of the next guess, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }
}
