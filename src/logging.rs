//! Tracing subscriber setup for the CLI
//!
//! Logs go to stderr so scored output on stdout stays pipeable.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a `-v` count to a default level
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `verbosity` when set.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
