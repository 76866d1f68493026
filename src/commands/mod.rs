//! Command implementations

pub mod batch;
pub mod decode;
pub mod matrix;
pub mod score;

pub use batch::{BatchEntry, BatchResult, run_batch};
pub use decode::{DecodeResult, decode_score, encode_hint_string};
pub use matrix::{MatrixSummary, analyze_matrix};
pub use score::{ScoreResult, score_expressions};
