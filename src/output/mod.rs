//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_batch_result, print_decode_result, print_matrix_summary, print_score_result};
