//! Core domain types for Wordle
//!
//! Words, per-letter verdicts, the feedback scorer and guess histories.
//! Everything here is pure and allocation-light.

mod feedback;
mod history;
mod word;

pub use feedback::{Feedback, FeedbackError, Verdict, score};
pub use history::{GuessHistory, HistoryError};
pub use word::{WORD_LENGTH, Word, WordError};
