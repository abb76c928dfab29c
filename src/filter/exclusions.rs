//! Per-position letter exclusions derived from a guess history

use crate::core::{GuessHistory, Verdict, WORD_LENGTH, Word};
use std::fmt;

/// A set of the letters A-Z stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Every letter of the alphabet
    pub const ALL: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter.to_ascii_uppercase() - b'A')
    }

    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a letter
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not an ASCII letter
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        debug_assert!(letter.is_ascii_alphabetic(), "not a letter: {letter}");
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_alphabetic() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Comma-separated letters, e.g. `A, E, R`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Letters forbidden at each position, plus the letters known to be in the solution
///
/// Correct verdicts never forbid anything by position; they only mark their
/// letter as legitimately present. This keeps the candidate space wide for
/// strategies that want to try other letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusions {
    forbidden: [LetterSet; WORD_LENGTH],
    legitimate: LetterSet,
}

impl Exclusions {
    /// Derive exclusions from every entry of a history
    ///
    /// Two sweeps: the first collects misplaced letters (forbidden where they
    /// were guessed) and every letter seen as Correct or Present. The second
    /// interprets Absent verdicts, which need the complete legitimate set: a
    /// legitimate letter is only forbidden at the Absent position, any other
    /// letter is forbidden everywhere.
    #[must_use]
    pub fn from_history(history: &GuessHistory) -> Self {
        let mut exclusions = Self::default();

        for (guess, feedback) in history {
            for (position, verdict) in feedback.verdicts().iter().enumerate() {
                let letter = guess.char_at(position);
                match verdict {
                    Verdict::Present => {
                        exclusions.forbidden[position].insert(letter);
                        exclusions.legitimate.insert(letter);
                    }
                    Verdict::Correct => exclusions.legitimate.insert(letter),
                    Verdict::Absent => {}
                }
            }
        }

        for (guess, feedback) in history {
            for (position, verdict) in feedback.verdicts().iter().enumerate() {
                if *verdict != Verdict::Absent {
                    continue;
                }
                let letter = guess.char_at(position);
                if exclusions.legitimate.contains(letter) {
                    exclusions.forbidden[position].insert(letter);
                } else {
                    for forbidden in &mut exclusions.forbidden {
                        forbidden.insert(letter);
                    }
                }
            }
            log::trace!(
                "after {guess}: legitimate [{}], forbidden {:?}",
                exclusions.legitimate,
                exclusions.forbidden.map(|set| set.to_string())
            );
        }

        exclusions
    }

    /// Whether `word` avoids every forbidden letter at every position
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .zip(&self.forbidden)
            .all(|(&letter, forbidden)| !forbidden.contains(letter))
    }

    /// Letters forbidden at `position`
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[must_use]
    pub const fn forbidden_at(&self, position: usize) -> LetterSet {
        self.forbidden[position]
    }

    /// Letters seen as Correct or Present anywhere in the history
    #[must_use]
    pub const fn legitimate(&self) -> LetterSet {
        self.legitimate
    }
}
