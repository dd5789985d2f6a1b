//! Gallows art, one frame per wrong guess.

/// Frame 0 is the empty gallows; the last frame is the full figure.
pub const STAGES: [&str; 7] = [
    "\n  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "\n  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Wrong guesses allowed before the game is lost.
pub const MAX_WRONG: usize = STAGES.len() - 1;

/// Frame for `wrong` misses, clamped to the final frame.
pub fn stage(wrong: usize) -> &'static str {
    STAGES[wrong.min(MAX_WRONG)]
}
