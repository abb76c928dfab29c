//! Main Wordle solver interface

use super::strategy::{SolverError, Strategy};
use crate::core::{GuessHistory, Word};
use crate::filter::filter_candidates;
use rand::Rng;

/// Main Wordle solver
///
/// Couples a strategy with the solution pool and a fixed opening word.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    pool: &'a [Word],
    opening: Word,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `pool`: Words that can be the solution
    /// - `opening`: Guess made before any feedback exists
    pub const fn new(strategy: S, pool: &'a [Word], opening: Word) -> Self {
        Self {
            strategy,
            pool,
            opening,
        }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// Get the next guess given previous guesses and feedback
    ///
    /// The opening word is a fixed policy for an empty history; anything later
    /// comes from the strategy.
    ///
    /// # Errors
    /// Propagates the strategy's `SolverError` (an inconsistent history).
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &GuessHistory,
        rng: &mut R,
    ) -> Result<&Word, SolverError> {
        if history.is_empty() {
            return Ok(&self.opening);
        }

        self.strategy.next_guess(history, self.pool, rng)
    }

    /// Pool words that survive the Candidate Filter for this history
    #[must_use]
    pub fn candidates(&self, history: &GuessHistory) -> Vec<&'a Word> {
        filter_candidates(history, self.pool)
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &GuessHistory) -> usize {
        self.candidates(history).len()
    }
}
