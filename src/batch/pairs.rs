//! Parallel scoring of independent guess/answer pairs

use crate::core::{Expression, Score, score_packed};
use crate::error::ScoreError;
use rayon::prelude::*;

/// Score many pairs in parallel
///
/// Each pair is scored independently; the output is in input order, with a
/// per-pair error for length mismatches.
///
/// # Examples
/// ```
/// use nerdle_score::batch::score_pairs;
/// use nerdle_score::core::Expression;
///
/// let pairs = vec![
///     (Expression::new("54/9=6").unwrap(), Expression::new("4*7=28").unwrap()),
///     (Expression::new("1+9=10").unwrap(), Expression::new("12+34=46").unwrap()),
/// ];
///
/// let scores = score_pairs(&pairs);
/// assert_eq!(scores[0].as_ref().unwrap().value(), 520);
/// assert!(scores[1].is_err());
/// ```
#[must_use]
pub fn score_pairs(pairs: &[(Expression, Expression)]) -> Vec<Result<Score, ScoreError>> {
    tracing::debug!(pairs = pairs.len(), "scoring pairs");

    pairs
        .par_iter()
        .map(|(guess, answer)| score_packed(guess, answer))
        .collect()
}

/// Score one guess against many answers in parallel
///
/// # Errors
/// Returns the first `ScoreError::LengthMismatch` encountered.
pub fn score_against(guess: &Expression, answers: &[Expression]) -> Result<Vec<Score>, ScoreError> {
    answers
        .par_iter()
        .map(|answer| score_packed(guess, answer))
        .collect()
}
