//! Word solving command
//!
//! Lets the solver play a full game against a known target and records each step.

use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::game::{Game, GameOutcome, GuessError};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{Solver, SolverError, Strategy};
use crate::wordlists::WordLists;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("guess rejected: {0}")]
    Guess(#[from] GuessError),
    #[error("the solution list is empty")]
    NoSolutions,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub outcome: GameOutcome,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Partition metrics of the guess over the candidates, when more than one remained
    pub metrics: Option<GuessMetrics>,
}

/// Play `target` to the end with the given solver
///
/// Configured initial guesses are played first, then the solver takes over
/// until the game is won or the guess limit is reached.
///
/// # Errors
///
/// Returns an error if:
/// - an initial guess is not in the guess dictionary
/// - the strategy finds no solution consistent with the history
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    solver: &Solver<S>,
    lists: &WordLists,
    config: &GameConfig,
    target: Word,
    rng: &mut R,
) -> Result<SolveResult, SolveError> {
    let mut game = Game::new(lists, target, config.max_guesses);
    let mut forced = config.initial_guesses.iter();
    let mut steps = Vec::new();

    loop {
        if let Some(outcome) = game.outcome() {
            log::debug!(
                "{} {} after {} guesses",
                game.solution(),
                if outcome.win { "solved" } else { "missed" },
                outcome.num_guesses
            );
            return Ok(SolveResult {
                target: game.solution().clone(),
                steps,
                outcome,
            });
        }

        let candidates = solver.candidates(game.history());
        let guess = match forced.next() {
            Some(word) => word.clone(),
            None => solver.next_guess(game.history(), rng)?.clone(),
        };

        let metrics = (candidates.len() > 1).then(|| calculate_metrics(&guess, &candidates));
        let feedback = game.submit(guess.text())?;

        steps.push(GuessStep {
            word: guess,
            feedback,
            candidates_before: candidates.len(),
            candidates_after: solver.count_candidates(game.history()),
            metrics,
        });
    }
}
