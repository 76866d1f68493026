//! Conversion between packed scores and hint strings

use crate::core::{Feedback, Score};
use crate::error::ScoreError;

/// A packed score together with its decoded hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub score: Score,
    pub feedback: Feedback,
}

/// Decode a raw packed value for a given slot count
///
/// # Errors
///
/// Returns an error if the slot count is out of range, a slot holds the
/// reserved value, or bits beyond the last slot are set.
pub fn decode_score(value: u16, num_slots: usize) -> Result<DecodeResult, ScoreError> {
    let score = Score::from_raw(value);
    let feedback = score.decode(num_slots)?;
    Ok(DecodeResult { score, feedback })
}

/// Encode a hint string such as `+--??+-+`
///
/// # Errors
///
/// Returns an error for unknown symbols or an out-of-range length.
pub fn encode_hint_string(hints: &str) -> Result<DecodeResult, ScoreError> {
    let score = Score::from_hint_string(hints)?;
    let feedback = score.decode(hints.chars().count())?;
    Ok(DecodeResult { score, feedback })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_value() {
        let result = decode_score(520, 6).unwrap();
        assert_eq!(result.feedback.to_string(), "-?--?-");
    }

    #[test]
    fn decode_reserved_value() {
        assert_eq!(
            decode_score(0b11, 1),
            Err(ScoreError::ReservedHint { slot: 0 })
        );
    }

    #[test]
    fn encode_then_decode() {
        let encoded = encode_hint_string("+--??+-+").unwrap();
        let decoded = decode_score(encoded.score.value(), 8).unwrap();
        assert_eq!(encoded, decoded);
    }

    #[test]
    fn encode_rejects_unknown_symbol() {
        assert!(matches!(
            encode_hint_string("+G-"),
            Err(ScoreError::InvalidHintSymbol { symbol: 'G', position: 1 })
        ));
    }
}
