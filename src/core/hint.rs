//! Per-slot hint values
//!
//! The discriminants are the two-bit codes used by the packed [`Score`](super::Score):
//! - 0 = Incorrect (Nerdle black)
//! - 1 = Correct (Nerdle green)
//! - 2 = Misplaced (Nerdle purple)
//!
//! Code 3 is reserved and never produced.

use std::fmt;

/// Feedback for a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Hint {
    /// Character does not match any unclaimed answer character
    Incorrect = 0,
    /// Character equals the answer character in the same slot
    Correct = 1,
    /// Character appears elsewhere in the answer and was not yet claimed
    Misplaced = 2,
}

impl Hint {
    /// All hints, in code order
    pub const ALL: [Self; 3] = [Self::Incorrect, Self::Correct, Self::Misplaced];

    /// Two-bit wire code
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Decode a two-bit code, returning `None` for the reserved value 3
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Incorrect),
            1 => Some(Self::Correct),
            2 => Some(Self::Misplaced),
            _ => None,
        }
    }

    /// Single-character symbol used in hint strings
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::Hint;
    ///
    /// assert_eq!(Hint::Correct.symbol(), '+');
    /// assert_eq!(Hint::from_symbol('?'), Some(Hint::Misplaced));
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Incorrect => '-',
            Self::Correct => '+',
            Self::Misplaced => '?',
        }
    }

    /// Parse a hint-string symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Self::Incorrect),
            '+' => Some(Self::Correct),
            '?' => Some(Self::Misplaced),
            _ => None,
        }
    }

    /// Nerdle tile colour
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Incorrect => '⬛',
            Self::Correct => '🟩',
            Self::Misplaced => '🟪',
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
