//! Keyboard-style summary of what a history says about each letter

use crate::core::{GuessHistory, Verdict};
use crate::filter::LetterSet;

/// Letters partitioned by the best verdict they have received
///
/// A letter marked Correct anywhere counts as correct even if it was also
/// Present or Absent elsewhere. A letter is only wrong when every verdict it
/// received was Absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterBoard {
    pub correct: LetterSet,
    pub misplaced: LetterSet,
    pub wrong: LetterSet,
    pub unused: LetterSet,
}

impl LetterBoard {
    #[must_use]
    pub fn from_history(history: &GuessHistory) -> Self {
        let mut correct = LetterSet::empty();
        let mut present = LetterSet::empty();
        let mut absent = LetterSet::empty();

        for (guess, feedback) in history {
            for (&letter, verdict) in guess.chars().iter().zip(feedback.verdicts()) {
                match verdict {
                    Verdict::Correct => correct.insert(letter),
                    Verdict::Present => present.insert(letter),
                    Verdict::Absent => absent.insert(letter),
                }
            }
        }

        let misplaced = present.difference(correct);
        let wrong = absent.difference(correct.union(present));
        let unused = LetterSet::ALL.difference(correct.union(present).union(absent));

        Self {
            correct,
            misplaced,
            wrong,
            unused,
        }
    }

    /// The verdict shown for a letter, or `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<Verdict> {
        if self.correct.contains(letter) {
            Some(Verdict::Correct)
        } else if self.misplaced.contains(letter) {
            Some(Verdict::Present)
        } else if self.wrong.contains(letter) {
            Some(Verdict::Absent)
        } else {
            None
        }
    }
}
