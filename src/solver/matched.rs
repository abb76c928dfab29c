//! "Only matched patterns" strategy
//!
//! Keeps the pool words that would have produced exactly the feedback the last
//! guess received, and picks one of them uniformly at random.

use super::strategy::{SolverError, Strategy};
use crate::core::{Feedback, GuessHistory, Word, score};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Uniform random choice among words consistent with the most recent feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnlyMatchedPatterns;

impl OnlyMatchedPatterns {
    pub const NAME: &'static str = "only_matched_patterns";

    /// Pool words `w` for which `score(last_guess, w) == observed`
    #[must_use]
    pub fn survivors<'a>(last_guess: &Word, observed: Feedback, pool: &'a [Word]) -> Vec<&'a Word> {
        pool.iter()
            .filter(|&word| score(last_guess, word) == observed)
            .collect()
    }
}

impl Strategy for OnlyMatchedPatterns {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Only the last history entry is consulted
    fn next_guess<'a, R: Rng + ?Sized>(
        &self,
        history: &GuessHistory,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        let (last_guess, observed) = history.last().ok_or(SolverError::EmptyHistory)?;
        let survivors = Self::survivors(last_guess, *observed, pool);

        log::debug!(
            "{} of {} pool words match {observed} for {last_guess}",
            survivors.len(),
            pool.len()
        );

        survivors.choose(rng).copied().ok_or_else(|| {
            log::error!("no pool word scores {observed} against {last_guess}");
            SolverError::InconsistentHistory {
                guess: last_guess.clone(),
                feedback: *observed,
            }
        })
    }
}
