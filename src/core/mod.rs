//! Core domain types for Nerdle-style scoring
//!
//! This module contains the pure scoring types and has no I/O.
//! Everything here is `Copy`, allocation-free on the scoring path, and safe to share across threads.

mod alphabet;
mod expression;
mod feedback;
mod hint;
mod pool;
mod score;
mod scorer;

pub use alphabet::Alphabet;
pub use expression::{Expression, MAX_SLOTS};
pub use feedback::Feedback;
pub use hint::Hint;
pub use score::Score;
pub use scorer::{score, score_packed, score_str};
