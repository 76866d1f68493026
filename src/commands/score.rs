//! Single-pair scoring command
//!
//! Scores one guess against one answer under the run configuration.

use crate::config::ScorerConfig;
use crate::core::{Expression, Feedback, Score, score};
use crate::error::ScoreError;

/// Result of scoring one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Expression,
    pub answer: Expression,
    pub feedback: Feedback,
}

impl ScoreResult {
    /// Packed wire value
    #[must_use]
    pub fn packed(&self) -> Score {
        self.feedback.to_score()
    }
}

/// Parse, validate and score a guess against an answer
///
/// # Errors
///
/// Returns an error if:
/// - Either expression is invalid or breaks the configured alphabet/slot count
/// - The guess and answer differ in length
pub fn score_expressions(
    config: &ScorerConfig,
    guess: &str,
    answer: &str,
) -> Result<ScoreResult, ScoreError> {
    let guess = config.parse_expression(guess)?;
    let answer = config.parse_expression(answer)?;
    let feedback = score(&guess, &answer)?;

    tracing::info!(%guess, %answer, %feedback, "scored guess");

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}
