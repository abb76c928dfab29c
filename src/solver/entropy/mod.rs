//! Entropy-based guess selection
//!
//! Shannon entropy of the feedback distribution a guess induces over the
//! remaining candidates, and the strategy that maximizes it.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{EntropyStrategy, select_best_guess};
