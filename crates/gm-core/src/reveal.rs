//! The per-position reveal pattern for the current word.

use crate::letter::Letter;

/// One position of the reveal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The letter at this position is visible.
    Letter(char),
    /// The letter at this position is still hidden.
    Blank,
}

/// The visible form of the word: one [`Cell`] per letter position.
///
/// A position shows its letter once that letter has been guessed, or
/// unconditionally once the round is over. Whether any blanks remain is the
/// win condition, so the same view drives both the display and the
/// end-of-round check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    cells: Vec<Cell>,
}

impl Reveal {
    /// Build the pattern for `word` given the guessed letters.
    pub(crate) fn compute(word: &str, guessed: &[Letter], over: bool) -> Self {
        let cells = word
            .chars()
            .map(|ch| {
                if over || guessed.iter().any(|l| l.as_char() == ch) {
                    Cell::Letter(ch)
                } else {
                    Cell::Blank
                }
            })
            .collect();
        Self { cells }
    }

    /// The cells, one per letter position.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True once every position shows its letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| matches!(c, Cell::Letter(_)))
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: Vec<String> = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Letter(ch) => ch.to_string(),
                Cell::Blank => "_".to_string(),
            })
            .collect();
        write!(f, "{}", text.join(" "))
    }
}
