//! Candidate filtering from the command line
//!
//! Observations are given as `GUESS=FEEDBACK` pairs, e.g. `crane=WWCWC`.

use crate::core::{GuessHistory, HistoryError, Word};
use crate::filter::{Exclusions, filter_candidates};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("expected GUESS=FEEDBACK, got '{0}'")]
    MalformedPair(String),
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Result of filtering a dictionary
#[derive(Debug, Clone)]
pub struct FilterResult<'a> {
    pub history: GuessHistory,
    pub exclusions: Exclusions,
    pub candidates: Vec<&'a Word>,
}

/// Parse `GUESS=FEEDBACK` pairs into a history
///
/// # Errors
/// Returns `FilterError` for a pair without `=` or with a malformed guess or
/// feedback.
pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<GuessHistory, FilterError> {
    let (guesses, feedback): (Vec<&str>, Vec<&str>) = pairs
        .iter()
        .map(|pair| {
            let pair = pair.as_ref();
            pair.split_once('=')
                .ok_or_else(|| FilterError::MalformedPair(pair.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();

    Ok(GuessHistory::from_wire(&guesses, &feedback)?)
}

/// Words of `dictionary` compatible with `history`
#[must_use]
pub fn filter_words(history: GuessHistory, dictionary: &[Word]) -> FilterResult<'_> {
    let exclusions = Exclusions::from_history(&history);
    let candidates = filter_candidates(&history, dictionary);

    FilterResult {
        history,
        exclusions,
        candidates,
    }
}
