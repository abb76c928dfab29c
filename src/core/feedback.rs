//! Wordle feedback scoring and representation
//!
//! A feedback is one verdict per letter position. On the wire it is encoded as
//! a string of single-letter codes:
//! - `C` = Correct (letter in the right position)
//! - `M` = Misplaced (letter in the word, wrong position)
//! - `W` = Wrong (letter not in the word, or every copy already accounted for)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// All verdicts, in ordinal order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Wire code for this verdict (`C`, `M` or `W`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'M',
            Self::Absent => 'W',
        }
    }

    /// Parse a verdict from a wire code or one of the common display forms
    ///
    /// Accepts `C`/`G`/🟩, `M`/`Y`/🟨 and `W`/`-`/`_`/⬜/⬛, case-insensitive.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'C' | 'c' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            'M' | 'm' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'W' | 'w' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Colored square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly {WORD_LENGTH} symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}'")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess was the solution)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `solution`
    ///
    /// Implements Wordle's duplicate-letter rules with two passes over a
    /// multiset of the solution's letters:
    /// 1. Exact matches become `Correct` and consume their letter
    /// 2. Remaining positions become `Present` while copies of the letter are
    ///    left, otherwise `Absent`
    ///
    /// All exact matches must be consumed before any misplaced match is awarded.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let guess = Word::new("goose").unwrap();
    /// let solution = Word::new("grows").unwrap();
    ///
    /// // Only one O in GROWS, and the exact match claims it
    /// assert_eq!(Feedback::score(&guess, &solution).to_string(), "CWCMW");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut unclaimed = solution.letter_counts();
        let slot = |letter: u8| usize::from(letter - b'A');

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if guess.char_at(i) == solution.char_at(i) {
                *verdict = Verdict::Correct;
                unclaimed[slot(guess.char_at(i))] -= 1;
            }
        }

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let left = &mut unclaimed[slot(guess.char_at(i))];
            if *verdict != Verdict::Correct && *left > 0 {
                *verdict = Verdict::Present;
                *left -= 1;
            }
        }

        Self(verdicts)
    }

    /// The per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of `Correct` verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Number of `Present` verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Parse feedback from a string such as `"CMWWC"`, `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// # Errors
    /// Returns `FeedbackError` on a wrong symbol count or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let wire = Feedback::parse("CMWWC").unwrap();
    /// let squares = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(wire, squares);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, &symbol) in verdicts.iter_mut().zip(&symbols) {
            *slot = Verdict::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(verdicts))
    }

    /// Convert feedback to a colored-square string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

/// Renders the wire code, e.g. `CMWWC`
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Score `guess` against `solution`; see [`Feedback::score`]
#[inline]
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> Feedback {
    Feedback::score(guess, solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn feedback(guess: &str, solution: &str) -> Feedback {
        score(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
        assert_eq!(Feedback::PERFECT.to_string(), "CCCCC");
    }

    #[test]
    fn self_guess_is_perfect() {
        for word in ["crane", "slate", "speed", "llama", "aaaaa"] {
            assert!(feedback(word, word).is_perfect(), "{word}");
        }
    }

    #[test_case("abcde", "fghij", "WWWWW" ; "nothing shared")]
    #[test_case("crane", "slate", "WWCWC" ; "greens only")]
    #[test_case("goose", "grows", "CWCMW" ; "second copy absent once exact match claims it")]
    #[test_case("speed", "erase", "MWMMW" ; "both copies present when solution has two")]
    #[test_case("robot", "floor", "MMWCW" ; "misplaced then exact copy")]
    #[test_case("llama", "lemon", "CWWMW" ; "correct copy consumes the only l")]
    #[test_case("speed", "creep", "WMCCW" ; "duplicate guess letters both exact")]
    #[test_case("eerie", "theme", "MWWWC" ; "exact match first then one misplaced")]
    #[test_case("array", "radar", "MMMCW" ; "every copy matched once")]
    fn scores_with_duplicate_rules(guess: &str, solution: &str, expected: &str) {
        assert_eq!(feedback(guess, solution).to_string(), expected);
    }

    #[test]
    fn counts_match_verdicts() {
        let fb = feedback("robot", "floor");
        assert_eq!(fb.count_correct(), 1);
        assert_eq!(fb.count_present(), 2);
        assert_eq!(fb.get(3), Verdict::Correct);
        assert_eq!(fb.get(4), Verdict::Absent);
    }

    #[test]
    fn parse_accepts_every_notation() {
        let wire = Feedback::parse("CMWWC").unwrap();
        assert_eq!(Feedback::parse("cmwwc").unwrap(), wire);
        assert_eq!(Feedback::parse("GY--G").unwrap(), wire);
        assert_eq!(Feedback::parse("gy__g").unwrap(), wire);
        assert_eq!(Feedback::parse("🟩🟨⬜⬜🟩").unwrap(), wire);
    }

    #[test]
    fn parse_rejects_bad_input() {
        use FeedbackError::{InvalidLength, InvalidSymbol};

        assert_eq!(Feedback::parse("CMW"), Err(InvalidLength(3)));
        assert_eq!(Feedback::parse("CMWWCC"), Err(InvalidLength(6)));
        assert_eq!(Feedback::parse("CMXWC"), Err(InvalidSymbol('X')));
        assert_eq!(Feedback::parse(""), Err(InvalidLength(0)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let fb = feedback("robot", "floor");
        assert_eq!(fb.to_string().parse::<Feedback>().unwrap(), fb);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(feedback("crane", "slate").to_emoji(), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn verdict_codes_are_distinct() {
        for v in Verdict::ALL {
            assert_eq!(Verdict::from_symbol(v.code()), Some(v));
            assert_eq!(Verdict::from_symbol(v.emoji()), Some(v));
        }
    }
}
