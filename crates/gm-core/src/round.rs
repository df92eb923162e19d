//! A single round: the word, the guesses, and the win/loss bookkeeping.

use serde::{Deserialize, Serialize};

use crate::letter::Letter;
use crate::reveal::Reveal;
use crate::stage::MAX_WRONG_GUESSES;

/// Who won a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The guesser revealed the whole word in time.
    Player,
    /// The guesser ran out of wrong guesses.
    Opponent,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "You"),
            Self::Opponent => write!(f, "Computer"),
        }
    }
}

/// What a single guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter occurs in the word.
    Hit,
    /// The letter does not occur in the word.
    Miss,
    /// No-op: the round was already over or the letter already guessed.
    Ignored,
}

/// Availability of a letter on the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not yet guessed; accepts a guess.
    Available,
    /// Already guessed this round.
    Used,
}

/// One round of the game, from word selection to win or loss.
///
/// The word is fixed for the round's lifetime. Guesses accumulate one at a
/// time until either the wrong-guess budget is spent (opponent wins) or the
/// reveal pattern has no blanks left (player wins); after that every further
/// guess is ignored.
#[derive(Debug, Clone)]
pub struct Round {
    category: String,
    word: String,
    guessed: Vec<Letter>,
    wrong_guesses: u32,
    outcome: Option<Winner>,
}

impl Round {
    /// Start a round over `word` (normalized to uppercase) in `category`.
    pub fn new(category: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            word: word.into().to_ascii_uppercase(),
            guessed: Vec::new(),
            wrong_guesses: 0,
            outcome: None,
        }
    }

    /// The category the word was drawn from.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The word being guessed, uppercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Letters guessed so far, in guess order.
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    /// Wrong guesses spent so far.
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// The winner, once the round is over.
    pub fn outcome(&self) -> Option<Winner> {
        self.outcome
    }

    /// True once a terminal condition has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Submit a guess.
    ///
    /// Repeated letters and guesses after the round is over are ignored. A
    /// miss spends one point of the wrong-guess budget; spending the last
    /// point loses the round. A guess that leaves the reveal pattern without
    /// blanks wins it.
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        if self.is_over() || self.guessed.contains(&letter) {
            return GuessResult::Ignored;
        }
        self.guessed.push(letter);

        let result = if self.word.contains(letter.as_char()) {
            GuessResult::Hit
        } else {
            self.wrong_guesses += 1;
            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.outcome = Some(Winner::Opponent);
            }
            GuessResult::Miss
        };

        // Budget check first; the reveal check only sees a still-open round.
        if self.outcome.is_none() && self.reveal().is_complete() {
            self.outcome = Some(Winner::Player);
        }

        result
    }

    /// The current reveal pattern.
    pub fn reveal(&self) -> Reveal {
        Reveal::compute(&self.word, &self.guessed, self.is_over())
    }

    /// Whether `letter` is still available to guess.
    pub fn key_state(&self, letter: Letter) -> KeyState {
        if self.guessed.contains(&letter) {
            KeyState::Used
        } else {
            KeyState::Available
        }
    }

    /// Keyboard view: every letter A-Z with its availability.
    pub fn keyboard(&self) -> Vec<(Letter, KeyState)> {
        Letter::all().map(|l| (l, self.key_state(l))).collect()
    }

    /// Index into the gallows drawings, always in 0..=6.
    pub fn stage_index(&self) -> usize {
        self.wrong_guesses.min(MAX_WRONG_GUESSES) as usize
    }
}
