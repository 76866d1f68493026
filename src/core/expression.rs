//! Guess and answer representation
//!
//! An [`Expression`] is a bounded sequence of 1 to [`MAX_SLOTS`] printable ASCII
//! characters. The bound comes from the packed score: two bits per slot in a `u16`.

use crate::error::ScoreError;
use std::fmt;

/// Largest slot count the packed 16-bit score can represent
pub const MAX_SLOTS: usize = 8;

/// A fixed-length guess or answer
///
/// Stores the characters inline so scoring never allocates for the sequence itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expression {
    chars: [u8; MAX_SLOTS],
    len: usize,
}

impl Expression {
    /// Create an expression from a string
    ///
    /// No case folding or alphabet check happens here; see
    /// [`Alphabet::check`](super::Alphabet::check) for that.
    ///
    /// # Errors
    /// Returns `ScoreError` if:
    /// - The string is empty
    /// - It holds more than [`MAX_SLOTS`] characters
    /// - Any character is not printable ASCII
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::Expression;
    ///
    /// let expr = Expression::new("12+34=46").unwrap();
    /// assert_eq!(expr.len(), 8);
    ///
    /// assert!(Expression::new("").is_err());
    /// assert!(Expression::new("123+456=579").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, ScoreError> {
        let bytes = text.as_bytes();

        if bytes.is_empty() {
            return Err(ScoreError::EmptyExpression);
        }

        if let Some(position) = bytes.iter().position(|b| !b.is_ascii_graphic()) {
            // Report the character index, not the byte index, for multi-byte input
            let position = text
                .char_indices()
                .take_while(|&(i, _)| i < position)
                .count();
            return Err(ScoreError::NonPrintable { position });
        }

        if bytes.len() > MAX_SLOTS {
            return Err(ScoreError::SlotCountExceeded {
                len: bytes.len(),
                max: MAX_SLOTS,
            });
        }

        let mut chars = [0u8; MAX_SLOTS];
        chars[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            chars,
            len: bytes.len(),
        })
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: an expression has at least one slot
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slot characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars[..self.len]
    }

    /// Character at a slot
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, slot: usize) -> u8 {
        self.chars()[slot]
    }

    /// The expression as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII, which is always valid UTF-8
        std::str::from_utf8(self.chars()).unwrap_or_default()
    }
}

impl std::str::FromStr for Expression {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
