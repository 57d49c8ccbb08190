//! Tracing setup
//!
//! The terminal is owned by the TUI while the app runs, so log output only
//! goes to a file. With no file configured no subscriber is installed and
//! the `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

/// Install the global subscriber. Returns whether logging is enabled.
///
/// The configured filter must parse even when a valid `RUST_LOG` overrides it.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let configured = EnvFilter::try_new(&config.filter)
        .map_err(|e| AppError::Logging(format!("bad filter '{}': {}", config.filter, e)))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
