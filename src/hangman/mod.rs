//! Hangman - guess the hidden animal one letter at a time.
//!
//! The game state is plain data; [`session::play`] drives it over any async line
//! reader and writer, and the `hangman` binary wires that to the terminal.
//!
//! Rules:
//! - the word is shown as one `_` per letter; correct guesses reveal every match
//! - each letter may be guessed once
//! - a miss advances the gallows by one frame; [`stages::MAX_WRONG`] misses lose
//! - revealing the whole word wins

pub mod session;
pub mod stages;
pub mod words;

use std::collections::BTreeSet;

use crate::validation::{validate_guess, GuessError};

const HIDDEN: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit,
    Miss,
}

#[derive(Debug, Clone)]
pub struct Game {
    word: Vec<char>,
    hint: Vec<char>,
    used: BTreeSet<char>,
    wrong: usize,
}

impl Game {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let hint = vec![HIDDEN; word.len()];
        Game {
            word,
            hint,
            used: BTreeSet::new(),
            wrong: 0,
        }
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    /// Revealed letters with `_` for hidden ones.
    pub fn hint(&self) -> String {
        self.hint.iter().collect()
    }

    pub fn used(&self) -> &BTreeSet<char> {
        &self.used
    }

    pub fn wrong(&self) -> usize {
        self.wrong
    }

    pub fn is_won(&self) -> bool {
        self.hint == self.word
    }

    pub fn is_lost(&self) -> bool {
        self.wrong >= stages::MAX_WRONG
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Validate raw input and apply it.
    pub fn guess(&mut self, input: &str) -> Result<Guess, GuessError> {
        let letter = validate_guess(input, &self.used)?;
        Ok(self.apply(letter))
    }

    /// Apply an already-validated letter.
    pub fn apply(&mut self, letter: char) -> Guess {
        self.used.insert(letter);
        let mut hit = false;
        for (shown, &actual) in self.hint.iter_mut().zip(&self.word) {
            if actual == letter {
                *shown = actual;
                hit = true;
            }
        }
        if hit {
            Guess::Hit
        } else {
            self.wrong += 1;
            Guess::Miss
        }
    }

    /// `Word: c _ t`
    pub fn word_line(&self) -> String {
        let spaced: Vec<String> = self.hint.iter().map(char::to_string).collect();
        format!("Word: {}", spaced.join(" "))
    }

    /// `Guessed: a c t`, or `Guessed: None` before the first guess.
    pub fn guessed_line(&self) -> String {
        if self.used.is_empty() {
            return "Guessed: None".to_string();
        }
        let letters: Vec<String> = self.used.iter().map(char::to_string).collect();
        format!("Guessed: {}", letters.join(" "))
    }

    /// Gallows frame for the current miss count.
    pub fn gallows(&self) -> &'static str {
        stages::stage(self.wrong)
    }

    pub fn result_line(&self) -> String {
        if self.is_won() {
            "You win!".to_string()
        } else {
            format!("You lose! Word: {}", self.word())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_hides_every_letter() {
        let g = Game::new("goose");
        assert_eq!(g.hint(), "_____");
        assert_eq!(g.word_line(), "Word: _ _ _ _ _");
        assert_eq!(g.guessed_line(), "Guessed: None");
        assert!(!g.is_over());
    }

    #[test]
    fn hit_reveals_all_matches() {
        let mut g = Game::new("goose");
        assert_eq!(g.guess("o"), Ok(Guess::Hit));
        assert_eq!(g.hint(), "_oo__");
        assert_eq!(g.wrong(), 0);
    }

    #[test]
    fn miss_counts_and_records() {
        let mut g = Game::new("cat");
        assert_eq!(g.guess("z"), Ok(Guess::Miss));
        assert_eq!(g.wrong(), 1);
        assert_eq!(g.gallows(), stages::STAGES[1]);
        assert_eq!(g.guess("z"), Err(GuessError::AlreadyUsed('z')));
        assert_eq!(g.wrong(), 1);
    }

    #[test]
    fn guessed_line_is_sorted() {
        let mut g = Game::new("cat");
        for l in ["t", "b", "a"] {
            g.guess(l).unwrap();
        }
        assert_eq!(g.guessed_line(), "Guessed: a b t");
    }

    #[test]
    fn win_and_loss() {
        let mut g = Game::new("ox");
        g.guess("O").unwrap();
        g.guess("x").unwrap();
        assert!(g.is_won());
        assert_eq!(g.result_line(), "You win!");

        let mut g = Game::new("ox");
        for l in ["a", "b", "c", "d", "e", "f"] {
            assert!(!g.is_over());
            assert_eq!(g.guess(l), Ok(Guess::Miss));
        }
        assert!(g.is_lost());
        assert_eq!(g.result_line(), "You lose! Word: ox");
    }
}
