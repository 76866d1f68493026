//! Packed score encoding
//!
//! A score stores one [`Hint`] per slot in two bits of a `u16`:
//! slot `i` occupies bits `2i` and `2i + 1`, slot 0 in the least significant pair.
//!
//! | bits | hint      |
//! |------|-----------|
//! | 00   | Incorrect |
//! | 01   | Correct   |
//! | 10   | Misplaced |
//! | 11   | reserved  |
//!
//! Decoding needs the slot count, since trailing `Incorrect` slots are all-zero bits.

use super::expression::MAX_SLOTS;
use super::{Feedback, Hint};
use crate::error::ScoreError;
use std::fmt;

/// Packed hints for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Score(u16);

impl Score {
    /// Bits used by each slot
    pub const BITS_PER_SLOT: usize = 2;

    const SLOT_MASK: u16 = 0b11;

    /// Wrap a raw wire value without validation
    ///
    /// Use [`Score::decode`] to check it against a slot count.
    #[inline]
    #[must_use]
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// The raw wire value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Score with every one of `num_slots` slots `Correct`
    ///
    /// # Errors
    /// Returns `ScoreError` if `num_slots` is zero or exceeds [`MAX_SLOTS`].
    pub fn all_correct(num_slots: usize) -> Result<Self, ScoreError> {
        check_slot_count(num_slots)?;
        let packed = (0..num_slots).fold(0u16, |acc, slot| {
            acc | (Hint::Correct.bits() << (Self::BITS_PER_SLOT * slot))
        });
        Ok(Self(packed))
    }

    /// Check whether this is the solved score for `num_slots` slots
    #[must_use]
    pub fn is_all_correct(self, num_slots: usize) -> bool {
        Self::all_correct(num_slots).is_ok_and(|solved| solved == self)
    }

    /// Encode a hint sequence
    ///
    /// # Errors
    /// Returns `ScoreError` if `hints` is empty or longer than [`MAX_SLOTS`].
    pub fn encode(hints: &[Hint]) -> Result<Self, ScoreError> {
        Ok(Feedback::new(hints)?.to_score())
    }

    /// Hint stored at one slot
    ///
    /// # Errors
    /// Returns `ScoreError::SlotCountExceeded` if `slot >= MAX_SLOTS` and
    /// `ScoreError::ReservedHint` if the slot holds the reserved code 3.
    pub fn hint_at(self, slot: usize) -> Result<Hint, ScoreError> {
        if slot >= MAX_SLOTS {
            return Err(ScoreError::SlotCountExceeded {
                len: slot + 1,
                max: MAX_SLOTS,
            });
        }
        let bits = (self.0 >> (Self::BITS_PER_SLOT * slot)) & Self::SLOT_MASK;
        Hint::from_bits(bits).ok_or(ScoreError::ReservedHint { slot })
    }

    /// Decode into per-slot hints
    ///
    /// # Errors
    /// Returns `ScoreError` if:
    /// - `num_slots` is zero or exceeds [`MAX_SLOTS`]
    /// - Any slot holds the reserved code 3
    /// - Bits above slot `num_slots - 1` are set
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::{Hint, Score};
    ///
    /// let score = Score::from_raw(520);
    /// let feedback = score.decode(6).unwrap();
    /// assert_eq!(feedback.hints()[1], Hint::Misplaced);
    /// assert_eq!(feedback.to_string(), "-?--?-");
    /// ```
    pub fn decode(self, num_slots: usize) -> Result<Feedback, ScoreError> {
        check_slot_count(num_slots)?;

        let used_bits = Self::BITS_PER_SLOT * num_slots;
        if used_bits < 16 && self.0 >> used_bits != 0 {
            return Err(ScoreError::UnusedBitsSet { num_slots });
        }

        let mut feedback = Feedback::blank(num_slots);
        for slot in 0..num_slots {
            feedback.set(slot, self.hint_at(slot)?);
        }
        Ok(feedback)
    }

    /// Render as a hint string (`-` incorrect, `+` correct, `?` misplaced), slot 0 first
    ///
    /// # Errors
    /// Same conditions as [`Score::decode`].
    pub fn to_hint_string(self, num_slots: usize) -> Result<String, ScoreError> {
        Ok(self.decode(num_slots)?.to_string())
    }

    /// Parse a hint string such as `"+--??+-+"`
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidHintSymbol` for an unknown symbol, or a
    /// slot-count error if the string is empty or too long.
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::Score;
    ///
    /// let score = Score::from_hint_string("-?--?-").unwrap();
    /// assert_eq!(score.value(), 520);
    /// assert_eq!(score.to_hint_string(6).unwrap(), "-?--?-");
    /// ```
    pub fn from_hint_string(s: &str) -> Result<Self, ScoreError> {
        let hints = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Hint::from_symbol(symbol).ok_or(ScoreError::InvalidHintSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::encode(&hints)
    }
}

fn check_slot_count(num_slots: usize) -> Result<(), ScoreError> {
    if num_slots == 0 {
        return Err(ScoreError::EmptyExpression);
    }
    if num_slots > MAX_SLOTS {
        return Err(ScoreError::SlotCountExceeded {
            len: num_slots,
            max: MAX_SLOTS,
        });
    }
    Ok(())
}

impl std::str::FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hint_string(s)
    }
}

impl From<Feedback> for Score {
    fn from(feedback: Feedback) -> Self {
        feedback.to_score()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
