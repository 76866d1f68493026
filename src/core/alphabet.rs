//! Character sets accepted by a puzzle
//!
//! Scoring only compares characters for equality, so the alphabet is a
//! validation concern layered on top of [`Expression`].

use super::Expression;
use crate::error::ScoreError;
use std::fmt;

/// Nerdle symbols: digits, the four operators and `=`
const NERDLE_SYMBOLS: &[u8] = b"0123456789+-*/=";

/// Alphabet an expression must be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// Digits, `+ - * /` and `=`
    Nerdle,
    /// ASCII letters
    Letters,
    /// Any printable ASCII character
    #[default]
    Any,
}

impl Alphabet {
    /// Look up an alphabet by its CLI name
    ///
    /// Accepts `nerdle`, `letters` (or `wordle`) and `any`, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "nerdle" => Some(Self::Nerdle),
            "letters" | "wordle" => Some(Self::Letters),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nerdle => "nerdle",
            Self::Letters => "letters",
            Self::Any => "any",
        }
    }

    /// Check whether a single byte belongs to this alphabet
    #[must_use]
    pub fn contains(self, ch: u8) -> bool {
        match self {
            Self::Nerdle => NERDLE_SYMBOLS.contains(&ch),
            Self::Letters => ch.is_ascii_alphabetic(),
            Self::Any => ch.is_ascii_graphic(),
        }
    }

    /// Validate every slot of an expression
    ///
    /// # Errors
    /// Returns `ScoreError::DisallowedCharacter` for the first slot outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::core::{Alphabet, Expression};
    ///
    /// let expr = Expression::new("12+34=46").unwrap();
    /// assert!(Alphabet::Nerdle.check(&expr).is_ok());
    /// assert!(Alphabet::Letters.check(&expr).is_err());
    /// ```
    pub fn check(self, expression: &Expression) -> Result<(), ScoreError> {
        match expression
            .chars()
            .iter()
            .position(|&ch| !self.contains(ch))
        {
            Some(position) => Err(ScoreError::DisallowedCharacter {
                ch: char::from(expression.char_at(position)),
                position,
                alphabet: self,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Alphabet::from_name("Nerdle"), Some(Alphabet::Nerdle));
        assert_eq!(Alphabet::from_name("WORDLE"), Some(Alphabet::Letters));
        assert_eq!(Alphabet::from_name("any"), Some(Alphabet::Any));
        assert_eq!(Alphabet::from_name("klingon"), None);
    }

    #[test]
    fn nerdle_accepts_operators_and_digits() {
        for &ch in b"0123456789+-*/=" {
            assert!(Alphabet::Nerdle.contains(ch));
        }
        assert!(!Alphabet::Nerdle.contains(b'a'));
        assert!(!Alphabet::Nerdle.contains(b'('));
    }

    #[test]
    fn check_reports_first_bad_slot() {
        let expr = Expression::new("crane").unwrap();
        assert_eq!(
            Alphabet::Nerdle.check(&expr),
            Err(ScoreError::DisallowedCharacter {
                ch: 'c',
                position: 0,
                alphabet: Alphabet::Nerdle,
            })
        );

        let mixed = Expression::new("ab1de").unwrap();
        assert!(matches!(
            Alphabet::Letters.check(&mixed),
            Err(ScoreError::DisallowedCharacter { ch: '1', position: 2, .. })
        ));
    }

    #[test]
    fn any_accepts_printable() {
        let expr = Expression::new("a1+!").unwrap();
        assert!(Alphabet::Any.check(&expr).is_ok());
    }
}
