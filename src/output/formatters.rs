//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// A guessed letter as a colored tile
#[must_use]
pub fn tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `guess` or `guesses`
#[must_use]
pub const fn plural_guesses(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_shows_letter() {
        assert!(tile(b'A', Verdict::Correct).to_string().contains(" A "));
        assert!(tile(b'Z', Verdict::Absent).to_string().contains(" Z "));
    }

    #[test]
    fn tile_row_covers_every_letter() {
        let word = Word::new("goose").unwrap();
        let row = tile_row(&word, Feedback::parse("CWCMW").unwrap());
        for letter in [" G ", " O ", " S ", " E "] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn plural() {
        assert_eq!(plural_guesses(1), "guess");
        assert_eq!(plural_guesses(4), "guesses");
    }
}
