//! Unpacked scoring result
//!
//! A [`Feedback`] is the ordered list of hints for one guess, slot 0 first.
//! [`Score`] is its packed wire form.

use super::expression::MAX_SLOTS;
use super::{Hint, Score};
use crate::error::ScoreError;
use std::fmt;

/// Hints for every slot of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    hints: [Hint; MAX_SLOTS],
    len: usize,
}

impl Feedback {
    /// Build feedback from a hint slice
    ///
    /// # Errors
    /// Returns `ScoreError::EmptyExpression` for an empty slice and
    /// `ScoreError::SlotCountExceeded` for more than [`MAX_SLOTS`] hints.
    pub fn new(hints: &[Hint]) -> Result<Self, ScoreError> {
        if hints.is_empty() {
            return Err(ScoreError::EmptyExpression);
        }
        if hints.len() > MAX_SLOTS {
            return Err(ScoreError::SlotCountExceeded {
                len: hints.len(),
                max: MAX_SLOTS,
            });
        }

        let mut buf = [Hint::Incorrect; MAX_SLOTS];
        buf[..hints.len()].copy_from_slice(hints);
        Ok(Self {
            hints: buf,
            len: hints.len(),
        })
    }

    /// Feedback with every slot `Incorrect`, filled in by the scorer
    pub(crate) const fn blank(len: usize) -> Self {
        Self {
            hints: [Hint::Incorrect; MAX_SLOTS],
            len,
        }
    }

    pub(crate) fn set(&mut self, slot: usize, hint: Hint) {
        self.hints[slot] = hint;
    }

    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints[..self.len]
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Count slots carrying a given hint
    #[must_use]
    pub fn count(&self, hint: Hint) -> usize {
        self.hints().iter().filter(|&&h| h == hint).count()
    }

    /// True when every slot is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hints().iter().all(|&h| h == Hint::Correct)
    }

    /// Pack into the two-bit-per-slot encoding
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::{Feedback, Hint};
    ///
    /// let feedback = Feedback::new(&[Hint::Incorrect, Hint::Misplaced, Hint::Correct]).unwrap();
    /// assert_eq!(feedback.to_score().value(), 0b01_10_00);
    /// ```
    #[must_use]
    pub fn to_score(&self) -> Score {
        let packed = self
            .hints()
            .iter()
            .enumerate()
            .fold(0u16, |acc, (slot, hint)| {
                acc | (hint.bits() << (Score::BITS_PER_SLOT * slot))
            });
        Score::from_raw(packed)
    }

    /// Emoji tiles, slot 0 first
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.hints().iter().map(|h| h.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in self.hints() {
            write!(f, "{hint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Hint::{Correct, Incorrect, Misplaced};

    #[test]
    fn feedback_rejects_bad_lengths() {
        assert_eq!(Feedback::new(&[]), Err(ScoreError::EmptyExpression));
        assert_eq!(
            Feedback::new(&[Correct; 9]),
            Err(ScoreError::SlotCountExceeded { len: 9, max: 8 })
        );
    }

    #[test]
    fn feedback_counts() {
        let feedback = Feedback::new(&[Correct, Misplaced, Incorrect, Misplaced]).unwrap();
        assert_eq!(feedback.count(Correct), 1);
        assert_eq!(feedback.count(Misplaced), 2);
        assert_eq!(feedback.count(Incorrect), 1);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_solved() {
        let feedback = Feedback::new(&[Correct; 6]).unwrap();
        assert!(feedback.is_solved());
        assert_eq!(feedback.to_score(), Score::all_correct(6).unwrap());
    }

    #[test]
    fn feedback_packs_slot_zero_lowest() {
        let feedback =
            Feedback::new(&[Incorrect, Misplaced, Incorrect, Incorrect, Misplaced, Incorrect])
                .unwrap();
        assert_eq!(feedback.to_score().value(), 520);
    }

    #[test]
    fn feedback_display_and_emoji() {
        let feedback = Feedback::new(&[Correct, Misplaced, Incorrect]).unwrap();
        assert_eq!(feedback.to_string(), "+?-");
        assert_eq!(feedback.to_emoji(), "🟩🟪⬛");
    }
}
