//! The gallows drawings shown as wrong guesses accumulate.

/// Number of wrong guesses that loses the round.
pub const MAX_WRONG_GUESSES: u32 = 6;

/// Gallows drawings indexed by wrong-guess count: `STAGES[0]` is the empty
/// gallows, `STAGES[6]` the complete figure.
pub const STAGES: [&str; 7] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// The drawing for a given wrong-guess count, clamped to the final stage.
pub fn drawing(wrong_guesses: u32) -> &'static str {
    STAGES[wrong_guesses.min(MAX_WRONG_GUESSES) as usize]
}
