//! Runtime configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! [admin]
//! username = "admin"
//! password = "admin"
//!
//! [notifications]
//! reminder = "Event reminder: tomorrow at 10 AM"
//!
//! [logging]
//! file = "society-desk.log"
//! filter = "info"
//! ```
//!
//! Every table and key is optional; missing values take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use serde::Deserialize;

use crate::auth::Credentials;
use crate::error::{AppError, Result};

pub const DEFAULT_REMINDER: &str = "Event reminder: tomorrow at 10 AM";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(ClapParser, Debug, Default)]
#[command(name = "society-desk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage societies and events from the terminal", long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logging is off without one)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override the admin password
    #[arg(long)]
    pub admin_password: Option<String>,

    /// Override the reminder pushed when notifications are viewed
    #[arg(long)]
    pub reminder: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub admin: Credentials,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub reminder: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            reminder: DEFAULT_REMINDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text. `path` is only used for error reporting.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Build the effective config: file (if any), then flag overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(password) = &cli.admin_password {
            config.admin.password = password.clone();
        }
        if let Some(reminder) = &cli.reminder {
            config.notifications.reminder = reminder.clone();
        }
        if let Some(file) = &cli.log_file {
            config.logging.file = Some(file.clone());
        }

        Ok(config)
    }
}
