//! Nerdle Score
//!
//! Per-slot feedback for Nerdle/Wordle-style guesses, with correct handling of
//! repeated characters and a packed two-bits-per-slot encoding.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle_score::core::{Expression, Hint, score};
//!
//! let guess = Expression::new("10-43=46").unwrap();
//! let answer = Expression::new("12+34=56").unwrap();
//!
//! let feedback = score(&guess, &answer).unwrap();
//! assert_eq!(feedback.hints()[3], Hint::Misplaced);
//! assert_eq!(feedback.to_string(), "+--??+-+");
//!
//! // Packed form: slot i in bits 2i..2i+2
//! let packed = feedback.to_score();
//! assert_eq!(packed.decode(8).unwrap(), feedback);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Run configuration
pub mod config;

// Parallel bulk scoring
pub mod batch;

// Expression lists
pub mod lists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
