//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BatchResult, DecodeResult, MatrixSummary, ScoreResult};
use crate::core::Hint;
use colored::Colorize;

/// Print the result of scoring one pair
pub fn print_score_result(result: &ScoreResult, verbose: bool) {
    println!(
        "{}  {}",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "Hints: {}   Packed: {}",
        result.feedback.to_string().bright_yellow(),
        result.packed()
    );

    if verbose {
        println!("Answer: {}", result.answer.as_str().bright_cyan());
        println!(
            "  Correct: {}  Misplaced: {}  Incorrect: {}",
            result.feedback.count(Hint::Correct),
            result.feedback.count(Hint::Misplaced),
            result.feedback.count(Hint::Incorrect)
        );
        println!("  Binary:  {:016b}", result.packed().value());
    }

    if result.feedback.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
    }
}

/// Print a decoded (or encoded) score
pub fn print_decode_result(result: &DecodeResult) {
    println!(
        "{}  {}  {} ({:#06x})",
        result.feedback.to_string().bright_yellow(),
        result.feedback.to_emoji(),
        result.score,
        result.score.value()
    );
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult, verbose: bool) {
    for entry in &result.entries {
        match &entry.outcome {
            Ok(score) => {
                let hints = score
                    .to_hint_string(entry.guess.len())
                    .unwrap_or_else(|_| "?".repeat(entry.guess.len()));
                println!("{} {} {} {}", entry.guess, entry.answer, hints, score);
            }
            Err(err) => {
                eprintln!(
                    "{} {} {}",
                    entry.guess,
                    entry.answer,
                    format!("error: {err}").red()
                );
            }
        }
    }

    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Pairs scored:     {}", result.total_pairs());
    println!("   Solved pairs:     {}", format!("{}", result.solved()).green());
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures).red()
        );
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.0}", result.pairs_per_second);
}

/// Print a score matrix summary
pub fn print_matrix_summary(summary: &MatrixSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORE MATRIX".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} guesses × {} answers ({} slots)",
        summary.num_guesses, summary.num_answers, summary.num_slots
    );
    println!("   Distinct scores:  {}", summary.distinct_scores);
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());

    println!("\n📈 {}", "Worst-case answers left:".bright_cyan().bold());
    let max = summary.num_answers as f64;
    if let Some((guess, size)) = &summary.best_guess {
        println!(
            "   Best:   {} [{}] {}",
            guess.as_str().bright_green(),
            create_progress_bar(*size as f64, max, 30).green(),
            size
        );
    }
    println!(
        "   Mean:   {:<width$} [{}] {:.1}",
        "",
        create_progress_bar(summary.mean_max_bucket, max, 30),
        summary.mean_max_bucket,
        width = summary.num_slots
    );
    if let Some((guess, size)) = &summary.worst_guess {
        println!(
            "   Worst:  {} [{}] {}",
            guess.as_str().yellow(),
            create_progress_bar(*size as f64, max, 30).yellow(),
            size
        );
    }
}
