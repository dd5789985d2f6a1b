//! # yazikit - small terminal helpers
//!
//! Two command-line tools built on one library:
//!
//! - **yazi-bulk-rename**: prints episode filenames (`01.mp4`, `10.mp4`, ...) in the
//!   "base number, then its decade" order expected when pasting into Yazi's bulk
//!   rename buffer. It only prints names; nothing on disk is touched.
//! - **hangman**: a classic terminal word-guessing game with ASCII gallows.
//!
//! ## Quick Start
//!
//! ```rust
//! use yazikit::episodes::episode_names;
//!
//! let names = episode_names(1, 12, "mkv");
//! assert_eq!(names[..4], ["01.mkv", "10.mkv", "11.mkv", "12.mkv"]);
//! ```
//!
//! ## Module Organization
//!
//! - [`episodes`] - the episode ordering and filename formatting
//! - [`hangman`] - game state, word list, gallows frames, and the session loop
//! - [`cli`] - clap argument definitions for both binaries
//! - [`config`] - optional TOML configuration
//! - [`logutil`] - logger setup and single-line escaping for log values
//! - [`validation`] - guess validation

pub mod cli;
pub mod config;
pub mod episodes;
pub mod hangman;
pub mod logutil;
pub mod validation;
