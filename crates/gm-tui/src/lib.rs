//! Full-screen terminal UI for the Galgenmann hangman game.
//!
//! Two screens driven by the [`gm_core::GameSession`] state machine: the
//! room lobby and the game board. The terminal module owns raw mode, the
//! alternate screen, and the event loop.

pub mod app;
pub mod screen;
pub mod shared;
pub mod terminal;
