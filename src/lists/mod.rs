//! Expression lists for bulk scoring
//!
//! Provides loaders for guess/answer files used by the batch and matrix commands.

pub mod loader;

pub use loader::{expressions_from_slice, load_expressions, load_pairs};
