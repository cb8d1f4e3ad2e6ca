//! Log setup
//!
//! The terminal belongs to the game, so events go to a file as JSON lines.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `settings.log_path`
///
/// `RUST_LOG` takes precedence over `settings.log_level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the filter is invalid,
/// or a subscriber is already installed.
pub fn init(settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_path)
        .with_context(|| format!("opening log file {}", settings.log_path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("invalid log level '{}'", settings.log_level))?,
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}
