//! Batch scoring command
//!
//! Scores a list of guess/answer pairs in parallel and collects throughput stats.

use crate::batch::score_pairs;
use crate::config::ScorerConfig;
use crate::core::{Expression, Score};
use crate::error::ScoreError;
use std::time::{Duration, Instant};

/// Outcome for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub guess: Expression,
    pub answer: Expression,
    pub outcome: Result<Score, ScoreError>,
}

/// Result of a batch run
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub failures: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

impl BatchResult {
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.entries.len()
    }

    /// Pairs whose score is all `Correct`
    #[must_use]
    pub fn solved(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                e.outcome
                    .as_ref()
                    .is_ok_and(|score| score.is_all_correct(e.guess.len()))
            })
            .count()
    }
}

/// Score every pair, checking each expression against `config`
///
/// Per-pair failures are recorded in the entry rather than aborting the run.
#[must_use]
pub fn run_batch(config: &ScorerConfig, pairs: Vec<(Expression, Expression)>) -> BatchResult {
    let start = Instant::now();
    let scores = score_pairs(&pairs);

    let entries: Vec<BatchEntry> = pairs
        .into_iter()
        .zip(scores)
        .map(|((guess, answer), scored)| {
            let outcome = config
                .check(&guess)
                .and_then(|()| config.check(&answer))
                .and(scored);
            BatchEntry {
                guess,
                answer,
                outcome,
            }
        })
        .collect();

    let failures = entries.iter().filter(|e| e.outcome.is_err()).count();
    let duration = start.elapsed();

    if failures > 0 {
        tracing::warn!(failures, total = entries.len(), "some pairs could not be scored");
    }
    tracing::info!(
        total = entries.len(),
        elapsed_ms = duration.as_millis(),
        "batch scored"
    );

    BatchResult {
        pairs_per_second: entries.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        entries,
        failures,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn pair(g: &str, a: &str) -> (Expression, Expression) {
        (Expression::new(g).unwrap(), Expression::new(a).unwrap())
    }

    #[test]
    fn batch_scores_all_pairs() {
        let pairs = vec![
            pair("54/9=6", "4*7=28"),
            pair("1+9=10", "1+9=10"),
            pair("10-43=66", "12+34=56"),
        ];

        let result = run_batch(&ScorerConfig::default(), pairs);
        assert_eq!(result.total_pairs(), 3);
        assert_eq!(result.failures, 0);
        assert_eq!(result.solved(), 1);
        assert_eq!(result.entries[0].outcome, Ok(Score::from_raw(520)));
        assert!(result.pairs_per_second > 0.0);
    }

    #[test]
    fn batch_records_failures() {
        let pairs = vec![pair("1+2=3", "10-2=8"), pair("1+2=3", "3=2+1")];

        let result = run_batch(&ScorerConfig::default(), pairs);
        assert_eq!(result.failures, 1);
        assert!(matches!(
            result.entries[0].outcome,
            Err(ScoreError::LengthMismatch { guess: 5, answer: 6 })
        ));
        assert!(result.entries[1].outcome.is_ok());
    }

    #[test]
    fn batch_applies_config() {
        let config = ScorerConfig::new(Alphabet::Nerdle, Some(5)).unwrap();
        let pairs = vec![pair("crane", "1+2=3"), pair("1+2=3", "2+1=3")];

        let result = run_batch(&config, pairs);
        assert_eq!(result.failures, 1);
        assert!(matches!(
            result.entries[0].outcome,
            Err(ScoreError::DisallowedCharacter { .. })
        ));
    }

    #[test]
    fn batch_empty() {
        let result = run_batch(&ScorerConfig::default(), Vec::new());
        assert_eq!(result.total_pairs(), 0);
        assert_eq!(result.failures, 0);
    }
}
