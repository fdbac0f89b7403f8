//! Diagnostics for `calrender`.
//!
//! Stdout carries exactly one rendered date (or one JSON document) per
//! run, and scripts capture it verbatim, so every log line goes to stderr.
//! Fallback warnings from the library (unknown style or calendar names)
//! are therefore visible at the default level without corrupting output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// The binary and the rendering library.
const LOG_TARGETS: &[&str] = &["calrender", "calendar_render"];

/// Level for a `-v` count: none -> warn, `-v` -> info, `-vv` -> debug,
/// `-vvv` and beyond -> trace.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `EnvFilter` directives limiting output to [`LOG_TARGETS`] at `level`.
fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG`, when set and valid, replaces
/// the `-v` mapping entirely.
///
/// Timestamps are omitted: a run renders one date and exits.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
