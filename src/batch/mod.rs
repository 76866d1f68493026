//! Bulk scoring
//!
//! Scoring calls are independent, so bulk work is a plain rayon map with no shared state.

mod matrix;
mod pairs;

pub use matrix::ScoreMatrix;
pub use pairs::{score_against, score_pairs};
