//! Input validation for Hangman guesses

use std::collections::BTreeSet;

/// Guess validation errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("No letter entered")]
    Empty,

    #[error("Enter exactly one letter")]
    NotSingle,

    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),

    #[error("'{0}' was already guessed")]
    AlreadyUsed(char),
}

/// Validate one line of player input as a guess.
///
/// Surrounding whitespace is ignored and the letter is lowercased before the
/// checks run, so `" A\n"` is the guess `a`.
pub fn validate_guess(input: &str, used: &BTreeSet<char>) -> Result<char, GuessError> {
    let lowered = input.trim().to_lowercase();
    let mut chars = lowered.chars();
    let letter = match (chars.next(), chars.next()) {
        (None, _) => return Err(GuessError::Empty),
        (Some(c), None) => c,
        (Some(_), Some(_)) => return Err(GuessError::NotSingle),
    };

    if !letter.is_alphabetic() {
        return Err(GuessError::NotAlphabetic(letter));
    }
    if used.contains(&letter) {
        return Err(GuessError::AlreadyUsed(letter));
    }
    Ok(letter)
}
