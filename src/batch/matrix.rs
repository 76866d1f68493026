//! Guess x answer score matrix
//!
//! Precomputes the packed score of every guess against every answer, row-major
//! with one row per guess. Rows are filled in parallel.

use crate::core::{Expression, Score, score_packed};
use crate::error::ScoreError;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Scores of every guess against every answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    scores: Vec<Score>,
    num_guesses: usize,
    num_answers: usize,
    num_slots: usize,
}

impl ScoreMatrix {
    /// Build the matrix
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` unless every guess and answer has the same length.
    ///
    /// # Examples
    /// ```
    /// use nerdle_score::batch::ScoreMatrix;
    /// use nerdle_score::core::Expression;
    ///
    /// let exprs: Vec<Expression> = ["1+2=3", "2+1=3", "3-1=2"]
    ///     .iter()
    ///     .map(|s| Expression::new(s).unwrap())
    ///     .collect();
    ///
    /// let matrix = ScoreMatrix::build(&exprs, &exprs).unwrap();
    /// assert_eq!(matrix.num_guesses(), 3);
    /// assert!(matrix.get(1, 1).is_all_correct(5));
    /// ```
    pub fn build(guesses: &[Expression], answers: &[Expression]) -> Result<Self, ScoreError> {
        Self::build_inner(guesses, answers, None)
    }

    /// Build the matrix, advancing `progress` once per finished guess row
    ///
    /// # Errors
    /// Same conditions as [`ScoreMatrix::build`].
    pub fn build_with_progress(
        guesses: &[Expression],
        answers: &[Expression],
        progress: &ProgressBar,
    ) -> Result<Self, ScoreError> {
        Self::build_inner(guesses, answers, Some(progress))
    }

    fn build_inner(
        guesses: &[Expression],
        answers: &[Expression],
        progress: Option<&ProgressBar>,
    ) -> Result<Self, ScoreError> {
        let num_slots = common_length(guesses, answers)?;

        tracing::info!(
            guesses = guesses.len(),
            answers = answers.len(),
            num_slots,
            "building score matrix"
        );

        let rows: Vec<Vec<Score>> = guesses
            .par_iter()
            .map(|guess| {
                let row = answers
                    .iter()
                    .map(|answer| score_packed(guess, answer))
                    .collect::<Result<Vec<_>, _>>();
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                row
            })
            .collect::<Result<_, _>>()?;

        let scores: Vec<Score> = rows.into_iter().flatten().collect();
        tracing::debug!(entries = scores.len(), "score matrix built");

        Ok(Self {
            scores,
            num_guesses: guesses.len(),
            num_answers: answers.len(),
            num_slots,
        })
    }

    #[must_use]
    pub const fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    #[must_use]
    pub const fn num_answers(&self) -> usize {
        self.num_answers
    }

    /// Slot count shared by every expression in the matrix
    #[must_use]
    pub const fn num_slots(&self) -> usize {
        self.num_slots
    }

    /// Score of guess `guess` against answer `answer`
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[must_use]
    pub fn get(&self, guess: usize, answer: usize) -> Score {
        assert!(answer < self.num_answers, "answer index out of range");
        self.scores[guess * self.num_answers + answer]
    }

    /// Scores of one guess against every answer
    ///
    /// # Panics
    /// Panics if `guess` is out of range
    #[must_use]
    pub fn row(&self, guess: usize) -> &[Score] {
        let start = guess * self.num_answers;
        &self.scores[start..start + self.num_answers]
    }

    /// Number of answers producing each score for one guess
    #[must_use]
    pub fn partition(&self, guess: usize) -> FxHashMap<Score, usize> {
        let mut buckets = FxHashMap::default();
        for &score in self.row(guess) {
            *buckets.entry(score).or_insert(0) += 1;
        }
        buckets
    }

    /// Size of the largest group of answers sharing one score for `guess`
    ///
    /// This is the worst case number of answers left after playing `guess`.
    #[must_use]
    pub fn max_bucket_size(&self, guess: usize) -> usize {
        self.partition(guess).into_values().max().unwrap_or(0)
    }

    /// [`max_bucket_size`](Self::max_bucket_size) for every guess, computed in parallel
    #[must_use]
    pub fn max_bucket_sizes(&self) -> Vec<usize> {
        (0..self.num_guesses)
            .into_par_iter()
            .map(|guess| self.max_bucket_size(guess))
            .collect()
    }

    /// Number of distinct scores appearing anywhere in the matrix
    #[must_use]
    pub fn distinct_scores(&self) -> usize {
        let mut seen: Vec<Score> = self.scores.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

/// Slot count shared by all expressions, taken from the answers when present
fn common_length(guesses: &[Expression], answers: &[Expression]) -> Result<usize, ScoreError> {
    let Some(expected) = answers.first().or(guesses.first()).map(Expression::len) else {
        return Ok(0);
    };

    if let Some(bad) = guesses.iter().find(|g| g.len() != expected) {
        return Err(ScoreError::LengthMismatch {
            guess: bad.len(),
            answer: expected,
        });
    }
    if let Some(bad) = answers.iter().find(|a| a.len() != expected) {
        return Err(ScoreError::LengthMismatch {
            guess: expected,
            answer: bad.len(),
        });
    }

    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score_str;

    fn exprs(items: &[&str]) -> Vec<Expression> {
        items.iter().map(|s| Expression::new(s).unwrap()).collect()
    }

    #[test]
    fn matrix_entries_match_direct_scoring() {
        let guesses = exprs(&["10-43=66", "10-84=46", "40-84=77"]);
        let answers = exprs(&["12+34=56", "10-43=66"]);

        let matrix = ScoreMatrix::build(&guesses, &answers).unwrap();
        assert_eq!(matrix.num_guesses(), 3);
        assert_eq!(matrix.num_answers(), 2);
        assert_eq!(matrix.num_slots(), 8);

        for (g, guess) in guesses.iter().enumerate() {
            for (a, answer) in answers.iter().enumerate() {
                assert_eq!(
                    Ok(matrix.get(g, a)),
                    score_str(guess.as_str(), answer.as_str())
                );
            }
        }
        assert_eq!(matrix.row(1).len(), 2);
    }

    #[test]
    fn diagonal_is_solved() {
        let items = exprs(&["1+2=3", "2+1=3", "3-1=2", "3-2=1", "1*3=3"]);
        let matrix = ScoreMatrix::build(&items, &items).unwrap();

        for i in 0..items.len() {
            assert!(matrix.get(i, i).is_all_correct(5));
        }
    }

    #[test]
    fn partition_counts_every_answer() {
        let items = exprs(&["1+2=3", "2+1=3", "3-1=2", "3-2=1", "1*3=3"]);
        let matrix = ScoreMatrix::build(&items, &items).unwrap();

        for guess in 0..items.len() {
            let total: usize = matrix.partition(guess).values().sum();
            assert_eq!(total, items.len());
            assert!(matrix.max_bucket_size(guess) >= 1);
        }
        assert_eq!(matrix.max_bucket_sizes().len(), items.len());
        assert!(matrix.distinct_scores() >= 2);
    }

    #[test]
    fn max_bucket_size_of_uninformative_guess() {
        // A guess sharing no characters with any answer puts them all in one bucket
        let guesses = exprs(&["abcde"]);
        let answers = exprs(&["1+2=3", "2+1=3", "3-1=2"]);
        let matrix = ScoreMatrix::build(&guesses, &answers).unwrap();

        assert_eq!(matrix.max_bucket_size(0), 3);
        assert_eq!(matrix.distinct_scores(), 1);
    }

    #[test]
    fn mixed_lengths_rejected() {
        let guesses = exprs(&["1+2=3", "10-2=8"]);
        let answers = exprs(&["1+2=3"]);
        assert_eq!(
            ScoreMatrix::build(&guesses, &answers),
            Err(ScoreError::LengthMismatch { guess: 6, answer: 5 })
        );

        let answers = exprs(&["1+2=3", "12/4=3"]);
        assert_eq!(
            ScoreMatrix::build(&exprs(&["1+2=3"]), &answers),
            Err(ScoreError::LengthMismatch { guess: 5, answer: 6 })
        );
    }

    #[test]
    fn empty_matrix() {
        let matrix = ScoreMatrix::build(&[], &[]).unwrap();
        assert_eq!(matrix.num_guesses(), 0);
        assert!(matrix.max_bucket_sizes().is_empty());
        assert_eq!(matrix.distinct_scores(), 0);
    }

    #[test]
    fn progress_advances_per_row() {
        let items = exprs(&["1+2=3", "2+1=3", "3-1=2"]);
        let pb = ProgressBar::hidden();
        let matrix = ScoreMatrix::build_with_progress(&items, &items, &pb).unwrap();

        assert_eq!(matrix.num_guesses(), 3);
        assert_eq!(pb.position(), 3);
    }
}
