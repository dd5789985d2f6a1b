//! # Configuration
//!
//! Optional TOML configuration shared by `yazi-bulk-rename` and `hangman`.
//! Every section has defaults, so a missing file or a file that only sets one
//! key is fine.
//!
//! - [`LoggingConfig`] - log level and optional log file
//! - [`RenameConfig`] - default episode range and extension for the renamer
//! - [`HangmanConfig`] - optional word list override
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yazikit::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("yazikit.toml").await?;
//!     println!("Default extension: {}", config.rename.extension);
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [logging]
//! level = "warn"
//! file = "yazikit.log"
//!
//! [rename]
//! start = 1
//! end = 10
//! extension = "mp4"
//!
//! [hangman]
//! words = ["ant", "bee", "cat"]
//! ```
//!
//! Precedence: CLI args > config file > built-in defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Default config path looked up by both binaries.
pub const DEFAULT_CONFIG_PATH: &str = "yazikit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub rename: RenameConfig,
    #[serde(default)]
    pub hangman: HangmanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`. Used when no `-v` is given.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` into a filter. Unknown values fall back to `Warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!(
                    "Invalid logging level '{}', defaulting to warn",
                    self.level
                );
                log::LevelFilter::Warn
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
    /// File extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_start() -> i64 {
    1
}

fn default_end() -> i64 {
    10
}

fn default_extension() -> String {
    "mp4".to_string()
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Replaces the built-in animal list when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml(&content).map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or unreadable.
    ///
    /// Logging is usually not set up yet at this point, so the reason is returned
    /// for the caller to log once the logger exists.
    pub async fn load_or_default(path: &str) -> (Self, Option<String>) {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return (Self::default(), None);
        }
        match Self::load(path).await {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    /// Write the default configuration to `path`.
    pub async fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
