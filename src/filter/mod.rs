//! Candidate filtering
//!
//! Narrows a dictionary to the words compatible with every (guess, feedback)
//! pair observed so far. The filter is deliberately conservative: it works on
//! per-position exclusions and never pins a letter to a position because of a
//! Correct verdict.

mod exclusions;

pub use exclusions::{Exclusions, LetterSet};

use crate::core::{GuessHistory, Word};

/// Words of `dictionary` that pass the exclusions derived from `history`
///
/// Order follows the dictionary. An empty history returns every word; the
/// dictionary itself is never modified.
///
/// # Examples
/// ```
/// use wordle_engine::core::{GuessHistory, Word, score};
/// use wordle_engine::filter::filter_candidates;
///
/// let dictionary: Vec<Word> = ["slate", "crane", "plate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = score(&guess, &dictionary[0]);
/// let history: GuessHistory = vec![(guess, feedback)].into();
///
/// let remaining = filter_candidates(&history, &dictionary);
/// assert_eq!(remaining.len(), 2); // SLATE and PLATE
/// ```
#[must_use]
pub fn filter_candidates<'a>(history: &GuessHistory, dictionary: &'a [Word]) -> Vec<&'a Word> {
    if history.is_empty() {
        return dictionary.iter().collect();
    }

    let exclusions = Exclusions::from_history(history);
    let remaining: Vec<&Word> = dictionary
        .iter()
        .filter(|word| exclusions.allows(word))
        .collect();

    log::debug!(
        "filtered {} words to {} using {} guesses",
        dictionary.len(),
        remaining.len(),
        history.len()
    );

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, score};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts<'a>(remaining: &[&'a Word]) -> Vec<&'a str> {
        remaining.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_returns_dictionary() {
        let dictionary = words(&["crane", "slate", "goose"]);
        let remaining = filter_candidates(&GuessHistory::new(), &dictionary);
        assert_eq!(texts(&remaining), vec!["CRANE", "SLATE", "GOOSE"]);
    }

    #[test]
    fn keeps_solution_and_drops_excluded_words() {
        let dictionary = words(&["slate", "plate", "crane", "grace", "stale"]);
        let guess = Word::new("crane").unwrap();
        let feedback = score(&guess, &dictionary[0]);
        let history: GuessHistory = vec![(guess, feedback)].into();

        let remaining = filter_candidates(&history, &dictionary);
        // CRANE and GRACE contain the absent letters C, R and N
        assert_eq!(texts(&remaining), vec!["SLATE", "PLATE", "STALE"]);
    }

    #[test]
    fn greens_do_not_pin_positions() {
        // A and E are correct at 2 and 4, yet words with other letters there survive
        let dictionary = words(&["slate", "stale", "moist"]);
        let guess = Word::new("crane").unwrap();
        let history: GuessHistory = vec![(guess, Feedback::parse("WWCWC").unwrap())].into();

        let remaining = filter_candidates(&history, &dictionary);
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn multiple_entries_accumulate() {
        let dictionary = words(&["slate", "plate", "stale", "spate"]);
        let solution = Word::new("plate").unwrap();
        let history: GuessHistory = ["crane", "slate"]
            .iter()
            .map(|g| {
                let guess = Word::new(g).unwrap();
                let fb = score(&guess, &solution);
                (guess, fb)
            })
            .collect();

        let remaining = filter_candidates(&history, &dictionary);
        // S is absent in PLATE, which removes every S word
        assert_eq!(texts(&remaining), vec!["PLATE"]);
    }

    #[test]
    fn dictionary_is_untouched() {
        let dictionary = words(&["crane", "slate"]);
        let before = dictionary.clone();
        let history: GuessHistory =
            vec![(Word::new("crane").unwrap(), Feedback::parse("WWWWW").unwrap())].into();

        let remaining = filter_candidates(&history, &dictionary);
        assert!(remaining.is_empty());
        assert_eq!(dictionary, before);
    }
}
