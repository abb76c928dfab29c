//! Request handlers for a front end that keeps its own game state
//!
//! The front end holds the solution index and the history as plain strings;
//! each call here is stateless apart from the shared word lists and the
//! in-memory scoreboard.

use crate::config::GameConfig;
use crate::core::{Feedback, GuessHistory, HistoryError, Word, score};
use crate::game::{GameOutcome, ModeSummary, Scoreboard};
use crate::solver::{Solver, SolverError, StrategyType};
use crate::wordlists::WordLists;
use rand::Rng;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("malformed history: {0}")]
    History(#[from] HistoryError),
    #[error("the solution list is empty")]
    NoSolutions,
}

/// Answer to a guess check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResponse {
    Feedback(Feedback),
    /// Bad solution index or a guess outside the guess dictionary
    Invalid,
}

/// `INVALID` or the wire-format feedback
impl fmt::Display for CheckResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feedback(feedback) => fmt::Display::fmt(feedback, f),
            Self::Invalid => f.write_str("INVALID"),
        }
    }
}

/// Inputs for generating the next guess
///
/// `current_guesses` and `guess_feedback` are parallel lists in wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub current_guesses: Vec<String>,
    pub guess_feedback: Vec<String>,
    pub mode: String,
}

pub struct GameService {
    lists: WordLists,
    config: GameConfig,
    scoreboard: Scoreboard,
}

impl GameService {
    #[must_use]
    pub fn new(lists: WordLists, config: GameConfig) -> Self {
        Self {
            lists,
            config,
            scoreboard: Scoreboard::new(),
        }
    }

    #[must_use]
    pub const fn lists(&self) -> &WordLists {
        &self.lists
    }

    /// Uniformly random index into the solution list
    ///
    /// # Errors
    /// Returns `ServiceError::NoSolutions` if the solution list is empty.
    pub fn solution_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, ServiceError> {
        let count = self.lists.solutions().len();
        if count == 0 {
            return Err(ServiceError::NoSolutions);
        }
        Ok(rng.random_range(0..count))
    }

    /// Score `guess` against the solution at `index`
    ///
    /// Any invalid input yields `CheckResponse::Invalid` rather than an error.
    #[must_use]
    pub fn check_guess(&self, index: i64, guess: &str) -> CheckResponse {
        let solution = usize::try_from(index)
            .ok()
            .and_then(|i| self.lists.solutions().get(i));

        if let (Some(solution), Some(guess)) = (solution, self.lists.accept(guess)) {
            CheckResponse::Feedback(score(&guess, solution))
        } else {
            log::debug!("rejected check: index {index}, guess {guess:?}");
            CheckResponse::Invalid
        }
    }

    /// Next guess for the requested mode
    ///
    /// # Errors
    /// Returns `ServiceError` for an unknown mode, a malformed history, or a
    /// history no solution is consistent with.
    pub fn generate_guess<R: Rng + ?Sized>(
        &self,
        request: &GenerateRequest,
        rng: &mut R,
    ) -> Result<Word, ServiceError> {
        let strategy: StrategyType = request.mode.parse()?;
        let history = GuessHistory::from_wire(&request.current_guesses, &request.guess_feedback)?;

        let opening = self.config.opening.clone();
        let solver = Solver::new(strategy, self.lists.solutions(), opening);
        Ok(solver.next_guess(&history, rng)?.clone())
    }

    /// Record a finished game and return the updated summaries for every mode
    pub fn record_stat(&mut self, mode: &str, outcome: GameOutcome) -> Vec<ModeSummary> {
        self.scoreboard.record(mode, outcome);
        self.scoreboard.summaries()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<ModeSummary> {
        self.scoreboard.summaries()
    }
}
