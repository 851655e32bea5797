//! Logging setup
//!
//! The level filter comes from `EXPENSE_TRACKER_LOG` (same syntax as
//! `RUST_LOG`) and defaults to `warn`. CLI runs log to stderr; the TUI owns
//! the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TrackerError, TrackerResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed or the log file cannot be
/// opened.
pub fn init(target: LogTarget<'_>) -> TrackerResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    TrackerError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    result.map_err(|e| TrackerError::Config(format!("Failed to initialise logging: {}", e)))
}
