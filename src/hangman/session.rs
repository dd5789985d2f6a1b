//! Interactive Hangman loop over an async line source.
//!
//! Input is any `AsyncBufRead` (stdin in the binary, a byte slice in tests) and output
//! any `io::Write`. Ctrl+C is not handled here; the binary races [`play`] against the
//! signal so an interrupted read is simply dropped.

use std::io::Write;

use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{Game, Guess};
use crate::logutil::escape_log;

pub const WELCOME: &str = "Welcome to Hangman! (Press Ctrl+C or Ctrl+D to exit)";
pub const PROMPT: &str = "Guess letter: ";
pub const INVALID_GUESS: &str = "Enter a single new alphabetic letter.";
pub const EXIT_EOF: &str = "\nExiting Hangman (Ctrl+D received).";
pub const EXIT_INTERRUPT: &str = "\nExiting Hangman (Ctrl+C received).";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Input closed before the game was decided.
    Eof,
}

/// Prompt until a valid guess is applied. `None` on end of input.
async fn next_guess<R, W>(game: &mut Game, input: &mut R, out: &mut W) -> Result<Option<Guess>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        match game.guess(&line) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => {
                debug!("hangman: rejected input '{}': {}", escape_log(&line), e);
                writeln!(out, "{}", INVALID_GUESS)?;
            }
        }
    }
}

/// Run one game to completion or end of input.
pub async fn play<R, W>(game: &mut Game, input: &mut R, out: &mut W) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;
    while !game.is_over() {
        writeln!(out, "\n{}", game.word_line())?;
        writeln!(out, "{}", game.guessed_line())?;
        match next_guess(game, input, out).await? {
            None => {
                writeln!(out, "{}", EXIT_EOF)?;
                return Ok(SessionEnd::Eof);
            }
            Some(Guess::Hit) => {}
            Some(Guess::Miss) => writeln!(out, "{}", game.gallows())?,
        }
    }
    writeln!(out, "\n{}", game.result_line())?;
    debug!(
        "hangman: finished with {} wrong guess(es), word '{}'",
        game.wrong(),
        game.word()
    );
    Ok(if game.is_won() {
        SessionEnd::Won
    } else {
        SessionEnd::Lost
    })
}
