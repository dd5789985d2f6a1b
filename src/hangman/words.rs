//! Secret word selection.

use rand::seq::SliceRandom;
use rand::Rng;

/// Built-in animal word list.
pub const ANIMALS: [&str; 64] = [
    "ant", "baboon", "badger", "bat", "bear", "beaver", "camel", "cat", "clam", "cobra",
    "cougar", "coyote", "crow", "deer", "dog", "donkey", "duck", "eagle", "ferret", "fox",
    "frog", "goat", "goose", "hawk", "lion", "lizard", "llama", "mole", "monkey", "moose",
    "mouse", "mule", "newt", "otter", "owl", "panda", "parrot", "pigeon", "python", "rabbit",
    "ram", "rat", "raven", "rhino", "salmon", "seal", "shark", "sheep", "skunk", "sloth",
    "snake", "spider", "stork", "swan", "tiger", "toad", "trout", "turkey", "turtle", "weasel",
    "whale", "wolf", "wombat", "zebra",
];

/// Word source for a game: the built-in animals or a configured override.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn builtin() -> Self {
        Self {
            words: ANIMALS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Build from configured words. Entries are trimmed and lowercased; entries that
    /// are empty or contain non-letters are dropped. Falls back to the built-in list
    /// when nothing usable remains.
    pub fn from_config(words: Option<&[String]>) -> Self {
        let Some(words) = words else {
            return Self::builtin();
        };
        let cleaned: Vec<String> = words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
            .collect();
        if cleaned.len() < words.len() {
            log::warn!(
                "hangman: ignored {} unusable configured word(s)",
                words.len() - cleaned.len()
            );
        }
        if cleaned.is_empty() {
            log::warn!("hangman: configured word list is empty, using built-in animals");
            return Self::builtin();
        }
        Self { words: cleaned }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Pick a word uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Never empty: both constructors guarantee at least one word.
        self.words.choose(rng).map(String::as_str).unwrap_or("hangman")
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}
