//! Error types for scoring and list loading

use std::path::PathBuf;
use thiserror::Error;

use crate::core::Alphabet;

/// Errors raised while building expressions, scoring, or decoding scores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} slots but answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },

    #[error("{len} slots requested, the packed encoding holds at most {max}")]
    SlotCountExceeded { len: usize, max: usize },

    #[error("expression must contain at least one slot")]
    EmptyExpression,

    #[error("slot {position} is not a printable ASCII character")]
    NonPrintable { position: usize },

    #[error("'{ch}' at slot {position} is not in the {alphabet} alphabet")]
    DisallowedCharacter {
        ch: char,
        position: usize,
        alphabet: Alphabet,
    },

    #[error("slot {slot} holds the reserved hint value 3")]
    ReservedHint { slot: usize },

    #[error("score has bits set beyond slot {num_slots}")]
    UnusedBitsSet { num_slots: usize },

    #[error("invalid hint symbol '{symbol}' at slot {position} (expected '-', '+' or '?')")]
    InvalidHintSymbol { symbol: char, position: usize },

    #[error("expected {expected} slots, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },
}

/// Errors raised while reading expression lists from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ScoreError,
    },

    #[error("{}:{line}: expected `<guess> <answer>`", .path.display())]
    MalformedPair { path: PathBuf, line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = ScoreError::LengthMismatch {
            guess: 6,
            answer: 8,
        };
        assert_eq!(err.to_string(), "guess has 6 slots but answer has 8");
    }

    #[test]
    fn disallowed_character_names_alphabet() {
        let err = ScoreError::DisallowedCharacter {
            ch: 'x',
            position: 2,
            alphabet: Alphabet::Nerdle,
        };
        assert_eq!(err.to_string(), "'x' at slot 2 is not in the nerdle alphabet");
    }

    #[test]
    fn malformed_pair_reports_location() {
        let err = LoadError::MalformedPair {
            path: PathBuf::from("pairs.txt"),
            line: 3,
        };
        assert_eq!(err.to_string(), "pairs.txt:3: expected `<guess> <answer>`");
    }
}
