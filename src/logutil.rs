//! Logging setup shared by both binaries, plus a helper that keeps user-supplied
//! strings on a single log line.
//!
//! Log records never go to stdout: the renamer's stdout is meant to be piped into
//! an editor buffer, so records go to stderr or to the configured log file.

use std::fmt::Write as _;
use std::io::Write;

use crate::config::LoggingConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Map `-v` count to a level. Zero defers to the configured level.
pub fn level_for(verbosity: u8, config: Option<&LoggingConfig>) -> log::LevelFilter {
    match verbosity {
        0 => config
            .map(LoggingConfig::level_filter)
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logging(config: Option<&LoggingConfig>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity, config));
    builder.target(env_logger::Target::Stderr);

    let log_file = config.and_then(|cfg| cfg.file.as_deref()).and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Cannot open log file {}: {}", path, e))
            .ok()
    });

    match log_file {
        Some(f) => {
            let file = std::sync::Mutex::new(f);
            // Mirror to the console only when a human is watching.
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format(TIMESTAMP_FORMAT);
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format(TIMESTAMP_FORMAT);
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
}

/// Escape control characters so a value prints on one log line, and cap its length.
///
/// `\n`, `\r`, `\t` and `\\` get their usual escapes; other control characters become
/// `\xNN`. Anything past 120 characters is replaced by an ellipsis.
pub fn escape_log(s: &str) -> String {
    const MAX_CHARS: usize = 120;
    let mut out = String::with_capacity(s.len().min(MAX_CHARS) + 4);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_CHARS) {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
