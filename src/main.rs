//! Nerdle Score - CLI
//!
//! Scores Nerdle/Wordle guesses, converts packed scores, and runs bulk scoring.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use nerdle_score::{
    commands::{analyze_matrix, decode_score, encode_hint_string, run_batch, score_expressions},
    config::ScorerConfig,
    core::Alphabet,
    lists::{load_expressions, load_pairs},
    logging::init_logging,
    output::{print_batch_result, print_decode_result, print_matrix_summary, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "nerdle_score",
    about = "Score Nerdle/Wordle guesses with a packed two-bit-per-slot hint encoding",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Alphabet: any (default), nerdle, letters
    #[arg(short, long, global = true, default_value = "any")]
    alphabet: String,

    /// Require exactly this many slots (1-8)
    #[arg(short = 'n', long, global = true)]
    slots: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against an answer
    Score {
        guess: String,
        answer: String,
    },

    /// Decode a packed score value into hints
    Decode {
        /// Packed value (decimal or 0x-prefixed hex)
        value: String,

        /// Number of slots the value encodes
        #[arg(short = 'k', long = "num-slots")]
        num_slots: usize,
    },

    /// Encode a hint string (- incorrect, + correct, ? misplaced) into its packed value
    Encode {
        hints: String,
    },

    /// Score every `<guess> <answer>` line of a file in parallel
    Batch {
        file: String,

        /// Print throughput statistics
        #[arg(long)]
        stats: bool,
    },

    /// Score every expression in a file against every other and summarize
    Matrix {
        file: String,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let alphabet = Alphabet::from_name(&cli.alphabet)
        .ok_or_else(|| anyhow!("unknown alphabet '{}' (expected any, nerdle or letters)", cli.alphabet))?;
    let config = ScorerConfig::new(alphabet, cli.slots).context("invalid --slots")?;

    match cli.command {
        Commands::Score { guess, answer } => run_score_command(&config, &guess, &answer, cli.verbose > 0),
        Commands::Decode { value, num_slots } => run_decode_command(&value, num_slots),
        Commands::Encode { hints } => run_encode_command(&hints),
        Commands::Batch { file, stats } => run_batch_command(&config, &file, stats),
        Commands::Matrix { file, quiet } => run_matrix_command(&config, &file, !quiet),
    }
}

fn run_score_command(config: &ScorerConfig, guess: &str, answer: &str, verbose: bool) -> Result<()> {
    let result = score_expressions(config, guess, answer)
        .with_context(|| format!("cannot score '{guess}' against '{answer}'"))?;
    print_score_result(&result, verbose);
    Ok(())
}

fn run_decode_command(value: &str, num_slots: usize) -> Result<()> {
    let raw = parse_packed(value)?;
    let result = decode_score(raw, num_slots).with_context(|| format!("cannot decode {value}"))?;
    print_decode_result(&result);
    Ok(())
}

fn run_encode_command(hints: &str) -> Result<()> {
    let result = encode_hint_string(hints).with_context(|| format!("cannot encode '{hints}'"))?;
    print_decode_result(&result);
    Ok(())
}

fn run_batch_command(config: &ScorerConfig, file: &str, stats: bool) -> Result<()> {
    let pairs = load_pairs(file)?;
    let result = run_batch(config, pairs);
    print_batch_result(&result, stats);

    if result.failures > 0 {
        return Err(anyhow!(
            "{} of {} pairs could not be scored",
            result.failures,
            result.total_pairs()
        ));
    }
    Ok(())
}

fn run_matrix_command(config: &ScorerConfig, file: &str, show_progress: bool) -> Result<()> {
    let expressions = load_expressions(file)?;
    let summary = analyze_matrix(config, &expressions, show_progress)
        .with_context(|| format!("cannot build score matrix for {file}"))?;
    print_matrix_summary(&summary);
    Ok(())
}

/// Parse a packed value given in decimal or `0x` hex
fn parse_packed(value: &str) -> Result<u16> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    };
    parsed.with_context(|| format!("'{value}' is not a 16-bit score value"))
}
