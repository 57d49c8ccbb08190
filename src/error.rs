//! Process-edge error type
//!
//! The registry and its containers never fail. [`AppError`] covers only what
//! can go wrong around them: reading the config file, opening the log file,
//! and driving the terminal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
