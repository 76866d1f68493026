//! Guess scoring
//!
//! Implements Nerdle/Wordle feedback rules, including repeated characters:
//! each answer character is credited to at most one guess slot.

use super::pool::UnclaimedPool;
use super::{Expression, Feedback, Hint, Score};
use crate::error::ScoreError;

/// Score `guess` against `answer`
///
/// # Algorithm
/// 1. Exact pass: slots where the characters agree are `Correct`; the answer
///    characters of every other slot go into the unclaimed pool, in order.
/// 2. Misplaced pass: remaining slots, left to right, claim the first pool
///    occurrence of their character (`Misplaced`) or get `Incorrect`.
///
/// Claims consume the pool, so when two guess slots compete for one answer
/// character the leftmost wins.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the expressions differ in length.
///
/// # Examples
/// ```
/// use nerdle_score::core::{Expression, score};
///
/// let guess = Expression::new("54/9=6").unwrap();
/// let answer = Expression::new("4*7=28").unwrap();
/// let feedback = score(&guess, &answer).unwrap();
///
/// assert_eq!(feedback.to_string(), "-?--?-");
/// assert_eq!(feedback.to_score().value(), 520);
/// ```
pub fn score(guess: &Expression, answer: &Expression) -> Result<Feedback, ScoreError> {
    if guess.len() != answer.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let mut feedback = Feedback::blank(guess.len());
    let mut pool = UnclaimedPool::new();
    let mut unresolved = [0usize; super::MAX_SLOTS];
    let mut num_unresolved = 0;

    for (slot, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            feedback.set(slot, Hint::Correct);
        } else {
            pool.push(a);
            unresolved[num_unresolved] = slot;
            num_unresolved += 1;
        }
    }

    for &slot in &unresolved[..num_unresolved] {
        if pool.claim(guess.char_at(slot)) {
            feedback.set(slot, Hint::Misplaced);
        }
    }

    Ok(feedback)
}

/// Score `guess` against `answer` and pack the result
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the expressions differ in length.
pub fn score_packed(guess: &Expression, answer: &Expression) -> Result<Score, ScoreError> {
    score(guess, answer).map(|feedback| feedback.to_score())
}

/// Score raw strings, validating them first
///
/// # Errors
/// Returns `ScoreError` if either string is not a valid [`Expression`] or the
/// lengths differ.
///
/// # Examples
/// ```
/// use nerdle_score::core::{Score, score_str};
///
/// let packed = score_str("1+9=10", "1+9=10").unwrap();
/// assert_eq!(packed, Score::all_correct(6).unwrap());
///
/// assert!(score_str("1+9=10", "12+34=46").is_err());
/// ```
pub fn score_str(guess: &str, answer: &str) -> Result<Score, ScoreError> {
    score_packed(&Expression::new(guess)?, &Expression::new(answer)?)
}
