//! Command-line surfaces of the two binaries.
//!
//! Range and extension flags are optional here so that an absent flag can fall back
//! to the config file before the built-in default; see [`RenameArgs::resolve`].

use clap::Parser;

use crate::config::{RenameConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "yazi-bulk-rename")]
#[command(about = "Print episode filenames in Yazi bulk-rename order")]
#[command(version)]
pub struct RenameArgs {
    /// Start episode number, inclusive (default: 1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// End episode number, inclusive (default: 10)
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// File extension/type without the leading dot (default: mp4)
    #[arg(short = 't', long = "type", value_name = "EXT")]
    pub extension: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Write a default configuration file to --config and exit
    #[arg(long)]
    pub init_config: bool,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved renamer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameJob {
    pub start: i64,
    pub end: i64,
    pub extension: String,
}

impl RenameArgs {
    /// CLI value if given, else the config value (which carries the built-in defaults).
    pub fn resolve(&self, config: &RenameConfig) -> RenameJob {
        RenameJob {
            start: self.start.unwrap_or(config.start),
            end: self.end.unwrap_or(config.end),
            extension: self
                .extension
                .clone()
                .unwrap_or_else(|| config.extension.clone()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Guess the hidden animal before the gallows is complete")]
#[command(version)]
pub struct HangmanArgs {
    /// Seed for the word choice (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
