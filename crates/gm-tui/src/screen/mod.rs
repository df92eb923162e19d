//! Screen management: trait definition, screen identifiers, and transitions.

pub mod game;
pub mod lobby;

use crossterm::event::KeyEvent;
use gm_core::GameSession;
use ratatui::prelude::*;

/// Identifies which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Room list and recent round results.
    Lobby,
    /// The hangman board.
    Game,
}

/// What a key press asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the current screen.
    None,
    /// Return to the lobby.
    ToLobby,
    /// Enter the game screen (a round has started).
    ToGame,
    /// Quit the application.
    Quit,
}

/// Trait that both screens implement.
pub trait Screen {
    /// Handle a key event against the session. Returns the transition the
    /// key asked for.
    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> Transition;

    /// Draw the screen content into the given area.
    fn draw(&self, session: &GameSession, frame: &mut Frame, area: Rect);

    /// Context-sensitive status bar text.
    fn status_hint(&self, session: &GameSession) -> &'static str;
}
