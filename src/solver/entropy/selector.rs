//! Maximum-entropy guess selection
//!
//! Every word in the guess pool is scored against the candidates in
//! parallel; the word whose feedback splits them most evenly wins.

use super::calculator::calculate_entropy;
use crate::core::{GuessHistory, Word};
use crate::filter::filter_candidates;
use crate::solver::strategy::{SolverError, Strategy};
use rand::Rng;
use rayon::prelude::*;

/// The pool word with the most information about `candidates`, and its entropy
///
/// Equal entropies resolve to the alphabetically smaller word, so parallel
/// evaluation order never changes the answer. `None` for an empty pool.
///
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::entropy::select_best_guess;
///
/// let pool: Vec<Word> = ["tipsy", "lemon"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let targets: Vec<Word> = ["lemon", "melon"].iter().map(|w| Word::new(w).unwrap()).collect();
///
/// let pool: Vec<&Word> = pool.iter().collect();
/// let targets: Vec<&Word> = targets.iter().collect();
///
/// // TIPSY gets the same answer from both, LEMON tells them apart
/// let (best, bits) = select_best_guess(&pool, &targets).unwrap();
/// assert_eq!(best.text(), "LEMON");
/// assert!((bits - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, candidates)))
        .max_by(|(w1, e1), (w2, e2)| e1.total_cmp(e2).then_with(|| w2.cmp(w1)))
}

/// Entropy maximization over the filtered candidates
///
/// Candidates are the pool words the Candidate Filter keeps, minus words
/// already guessed. The guess is always drawn from the candidates themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl EntropyStrategy {
    pub const NAME: &'static str = "entropy";
}

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn next_guess<'a, R: Rng + ?Sized>(
        &self,
        history: &GuessHistory,
        pool: &'a [Word],
        _rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        let candidates: Vec<&'a Word> = filter_candidates(history, pool)
            .into_iter()
            .filter(|word| !history.contains_guess(word))
            .collect();

        if let [only] = candidates.as_slice() {
            return Ok(*only);
        }

        let (best, entropy) = select_best_guess(&candidates, &candidates).ok_or_else(|| {
            log::error!("no candidates remain after {} guesses", history.len());
            SolverError::NoCandidates {
                guesses: history.len(),
            }
        })?;

        log::debug!(
            "{best} has {entropy:.3} bits over {} candidates",
            candidates.len()
        );
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, score};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn prefers_guess_that_separates_candidates() {
        let pool = words(&["zzzzz", "plate", "crane"]);
        let targets = words(&["slate", "plate", "crate", "grate"]);
        let pool: Vec<&Word> = pool.iter().collect();
        let targets: Vec<&Word> = targets.iter().collect();

        // CRANE answers CRATE, GRATE and the -LATE pair three different ways
        let (best, bits) = select_best_guess(&pool, &targets).unwrap();
        assert_eq!(best.text(), "CRANE");
        assert!(bits > 1.0);
    }

    #[test]
    fn equal_entropy_picks_smaller_word() {
        let pool = words(&["yyyyy", "qqqqq", "xxxxx"]);
        let targets = words(&["lemon"]);
        let pool: Vec<&Word> = pool.iter().collect();
        let targets: Vec<&Word> = targets.iter().collect();

        for _ in 0..8 {
            let (best, _) = select_best_guess(&pool, &targets).unwrap();
            assert_eq!(best.text(), "QQQQQ");
        }
    }

    #[test]
    fn empty_pool_has_no_best() {
        let targets = words(&["lemon"]);
        let targets: Vec<&Word> = targets.iter().collect();
        assert!(select_best_guess(&[], &targets).is_none());
    }

    #[test]
    fn strategy_never_repeats_a_guess() {
        let pool = words(&["slate", "plate", "crate"]);
        let guess = Word::new("slate").unwrap();
        let history: GuessHistory = vec![(guess.clone(), score(&guess, &pool[1]))].into();
        let mut rng = StdRng::seed_from_u64(0);

        let next = EntropyStrategy.next_guess(&history, &pool, &mut rng);
        assert_ne!(next.unwrap(), &guess);
    }

    #[test]
    fn strategy_returns_last_candidate_directly() {
        let pool = words(&["slate", "moist"]);
        let guess = Word::new("crane").unwrap();
        let history: GuessHistory = vec![(guess.clone(), score(&guess, &pool[1]))].into();
        let mut rng = StdRng::seed_from_u64(0);

        // MOIST shares nothing with CRANE; SLATE contains the absent A and E
        let next = EntropyStrategy.next_guess(&history, &pool, &mut rng);
        assert_eq!(next.unwrap().text(), "MOIST");
    }

    #[test]
    fn strategy_reports_empty_candidates() {
        let pool = words(&["slate", "plate"]);
        let guess = Word::new("slate").unwrap();
        let history: GuessHistory = vec![(guess, Feedback::parse("WWWWW").unwrap())].into();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            EntropyStrategy.next_guess(&history, &pool, &mut rng),
            Err(SolverError::NoCandidates { guesses: 1 })
        );
    }
}
