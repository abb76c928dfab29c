//! Information content of a guess
//!
//! Scoring a guess against every candidate splits the candidates into
//! partitions, one per distinct feedback. The partition sizes are all the
//! solver needs.

use crate::core::{Feedback, Word, score};
use rustc_hash::FxHashMap;

/// How well a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Bits of information the feedback is expected to reveal
    pub entropy: f64,
    /// Size of the partition the solution falls in, on average
    pub expected_remaining: f64,
    /// Largest partition
    pub max_partition: usize,
}

impl GuessMetrics {
    const NONE: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Sizes of the partitions `guess` splits `candidates` into
fn partition_sizes(guess: &Word, candidates: &[&Word]) -> Vec<usize> {
    let mut partitions: FxHashMap<Feedback, usize> = FxHashMap::default();
    for candidate in candidates {
        *partitions.entry(score(guess, candidate)).or_default() += 1;
    }
    partitions.into_values().collect()
}

/// Entropy in bits of a distribution given as raw outcome counts
///
/// Zero counts contribute nothing; an empty or all-zero input yields 0.
#[must_use]
pub fn shannon_entropy(sizes: impl IntoIterator<Item = usize>) -> f64 {
    let sizes: Vec<usize> = sizes.into_iter().filter(|&n| n > 0).collect();
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    sizes
        .iter()
        .map(|&n| n as f64 / total)
        .map(|p| -p * p.log2())
        .sum()
}

/// Expected information gain of `guess` over equally likely `candidates`
///
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::entropy::calculate_entropy;
///
/// let words: Vec<Word> = ["lemon", "melon", "grows", "goose"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// // Every candidate answers LEMON differently: two bits
/// let bits = calculate_entropy(&words[0], &candidates);
/// assert!((bits - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    shannon_entropy(partition_sizes(guess, candidates))
}

/// Entropy together with expected and worst-case partition sizes
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::NONE;
    }

    let sizes = partition_sizes(guess, candidates);
    // A partition of size n holds the solution with probability n / total
    let squares: usize = sizes.iter().map(|&n| n * n).sum();

    GuessMetrics {
        entropy: shannon_entropy(sizes.iter().copied()),
        expected_remaining: squares as f64 / candidates.len() as f64,
        max_partition: sizes.into_iter().max().unwrap_or(0),
    }
}
