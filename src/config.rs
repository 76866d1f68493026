//! Scorer configuration
//!
//! Holds the per-run puzzle settings: which alphabet inputs must use and,
//! optionally, the exact slot count. Capacity is checked when the config is built.

use crate::core::{Alphabet, Expression, MAX_SLOTS};
use crate::error::ScoreError;

/// Validated run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScorerConfig {
    alphabet: Alphabet,
    slots: Option<usize>,
}

impl ScorerConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ScoreError::SlotCountExceeded` if `slots` exceeds [`MAX_SLOTS`]
    /// and `ScoreError::EmptyExpression` if it is zero.
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::config::ScorerConfig;
    /// use nerdle_score::core::Alphabet;
    ///
    /// let config = ScorerConfig::new(Alphabet::Nerdle, Some(8)).unwrap();
    /// assert!(config.parse_expression("12+34=46").is_ok());
    /// assert!(config.parse_expression("1+9=10").is_err());
    ///
    /// assert!(ScorerConfig::new(Alphabet::Nerdle, Some(10)).is_err());
    /// ```
    pub fn new(alphabet: Alphabet, slots: Option<usize>) -> Result<Self, ScoreError> {
        match slots {
            Some(0) => return Err(ScoreError::EmptyExpression),
            Some(len) if len > MAX_SLOTS => {
                return Err(ScoreError::SlotCountExceeded {
                    len,
                    max: MAX_SLOTS,
                });
            }
            _ => {}
        }

        Ok(Self { alphabet, slots })
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Required slot count, if fixed
    #[must_use]
    pub const fn slots(&self) -> Option<usize> {
        self.slots
    }

    /// Parse and validate an expression against this configuration
    ///
    /// # Errors
    /// Returns `ScoreError` if the text is not a valid expression, uses
    /// characters outside the alphabet, or has the wrong slot count.
    pub fn parse_expression(&self, text: &str) -> Result<Expression, ScoreError> {
        let expr = Expression::new(text)?;
        self.check(&expr)?;
        Ok(expr)
    }

    /// Validate an already-built expression
    ///
    /// # Errors
    /// Same as [`ScorerConfig::parse_expression`], minus construction errors.
    pub fn check(&self, expr: &Expression) -> Result<(), ScoreError> {
        if let Some(expected) = self.slots
            && expr.len() != expected
        {
            return Err(ScoreError::SlotCountMismatch {
                expected,
                actual: expr.len(),
            });
        }
        self.alphabet.check(expr)
    }
}
