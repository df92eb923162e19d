//! Hangman game engine: word tables, rounds, and the lobby.
//!
//! The engine is a plain state machine with no terminal dependencies; any
//! frontend (TUI, line-mode CLI, test harness) drives it through
//! [`GameSession`] and renders the reveal pattern, keyboard view, and
//! gallows stages it exposes.

pub mod config;
pub mod error;
pub mod letter;
pub mod lobby;
pub mod reveal;
pub mod round;
pub mod session;
pub mod stage;
pub mod words;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use letter::Letter;
pub use lobby::{Lobby, Room, RoomStatus};
pub use reveal::{Cell, Reveal};
pub use round::{GuessResult, KeyState, Round, Winner};
pub use session::{GameSession, GuessOutcome, Phase, RoundRecord};
pub use stage::MAX_WRONG_GUESSES;
pub use words::WordList;
