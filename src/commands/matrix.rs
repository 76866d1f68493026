//! Score matrix analysis command
//!
//! Scores every expression against every other and summarizes how well each
//! guess splits the answers.

use crate::batch::ScoreMatrix;
use crate::config::ScorerConfig;
use crate::core::Expression;
use crate::error::ScoreError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Summary of a score matrix
pub struct MatrixSummary {
    pub num_guesses: usize,
    pub num_answers: usize,
    pub num_slots: usize,
    pub distinct_scores: usize,
    /// Guess with the smallest worst-case bucket, and that bucket size
    pub best_guess: Option<(Expression, usize)>,
    /// Guess with the largest worst-case bucket, and that bucket size
    pub worst_guess: Option<(Expression, usize)>,
    pub mean_max_bucket: f64,
    pub duration: Duration,
}

/// Build the matrix of `expressions` against themselves and summarize it
///
/// # Errors
///
/// Returns an error if any expression breaks the configuration or the
/// expressions do not all share one length.
pub fn analyze_matrix(
    config: &ScorerConfig,
    expressions: &[Expression],
    show_progress: bool,
) -> Result<MatrixSummary, ScoreError> {
    for expr in expressions {
        config.check(expr)?;
    }

    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(expressions.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("scoring");
        pb
    } else {
        ProgressBar::hidden()
    };

    let matrix = ScoreMatrix::build_with_progress(expressions, expressions, &pb)?;
    pb.finish_and_clear();

    let max_buckets = matrix.max_bucket_sizes();
    let pick = |index: Option<usize>| index.map(|i| (expressions[i], max_buckets[i]));

    // Ties resolve to the earliest guess in input order
    let best = max_buckets
        .iter()
        .enumerate()
        .min_by_key(|&(i, &size)| (size, i))
        .map(|(i, _)| i);
    let worst = max_buckets
        .iter()
        .enumerate()
        .max_by_key(|&(i, &size)| (size, std::cmp::Reverse(i)))
        .map(|(i, _)| i);

    let mean_max_bucket = if max_buckets.is_empty() {
        0.0
    } else {
        max_buckets.iter().sum::<usize>() as f64 / max_buckets.len() as f64
    };

    Ok(MatrixSummary {
        num_guesses: matrix.num_guesses(),
        num_answers: matrix.num_answers(),
        num_slots: matrix.num_slots(),
        distinct_scores: matrix.distinct_scores(),
        best_guess: pick(best),
        worst_guess: pick(worst),
        mean_max_bucket,
        duration: start.elapsed(),
    })
}
