//! Working multiset of unclaimed answer characters
//!
//! Lives for a single scoring call: filled during the exact-match pass,
//! drained one character at a time during the misplaced pass.

use super::expression::MAX_SLOTS;

/// Ordered pool of answer characters that were not exact matches
///
/// Claims remove the first occurrence, so earlier slots win ties.
#[derive(Debug, Clone)]
pub(crate) struct UnclaimedPool {
    chars: [u8; MAX_SLOTS],
    len: usize,
}

impl UnclaimedPool {
    pub(crate) const fn new() -> Self {
        Self {
            chars: [0; MAX_SLOTS],
            len: 0,
        }
    }

    /// Append an answer character, preserving input order
    pub(crate) fn push(&mut self, ch: u8) {
        debug_assert!(self.len < MAX_SLOTS, "pool cannot exceed MAX_SLOTS");
        self.chars[self.len] = ch;
        self.len += 1;
    }

    /// Remove the first occurrence of `ch`, returning whether one was found
    pub(crate) fn claim(&mut self, ch: u8) -> bool {
        let Some(pos) = self.as_slice().iter().position(|&c| c == ch) else {
            return false;
        };
        self.chars.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        true
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.chars[..self.len]
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }
}
