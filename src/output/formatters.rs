//! Formatting utilities for terminal output

use crate::core::{Expression, Feedback, Hint};
use colored::{ColoredString, Colorize};

/// Color one character as a Nerdle tile
#[must_use]
pub fn tile(ch: char, hint: Hint) -> ColoredString {
    let text = format!(" {ch} ");
    match hint {
        Hint::Correct => text.black().on_green(),
        Hint::Misplaced => text.white().on_purple(),
        Hint::Incorrect => text.white().on_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Expression, feedback: &Feedback) -> String {
    guess
        .as_str()
        .chars()
        .zip(feedback.hints())
        .map(|(ch, &hint)| tile(ch, hint).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
