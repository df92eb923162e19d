//! Top-level application state: the session and the active screen.

use crossterm::event::KeyEvent;
use gm_core::GameSession;
use ratatui::prelude::*;

use crate::screen::game::GameScreen;
use crate::screen::lobby::LobbyScreen;
use crate::screen::{Screen, ScreenId, Transition};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The game session every screen drives.
    pub session: GameSession,
    /// Currently visible screen.
    pub active: ScreenId,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Lobby screen state.
    pub lobby: LobbyScreen,
    /// Game screen state.
    pub game: GameScreen,
}

impl TuiApp {
    /// Create the app over a fresh session, starting in the lobby.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            active: ScreenId::Lobby,
            show_help: false,
            should_quit: false,
            lobby: LobbyScreen::new(),
            game: GameScreen::new(),
        }
    }

    /// Forward a key to the active screen and apply the transition it asks
    /// for.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let transition = match self.active {
            ScreenId::Lobby => self.lobby.handle_key(&mut self.session, key),
            ScreenId::Game => self.game.handle_key(&mut self.session, key),
        };
        match transition {
            Transition::None => {}
            Transition::ToLobby => self.active = ScreenId::Lobby,
            Transition::ToGame => self.active = ScreenId::Game,
            Transition::Quit => self.should_quit = true,
        }
    }

    /// Draw the active screen.
    pub fn draw_active(&self, frame: &mut Frame, area: Rect) {
        match self.active {
            ScreenId::Lobby => self.lobby.draw(&self.session, frame, area),
            ScreenId::Game => self.game.draw(&self.session, frame, area),
        }
    }

    /// Status bar text for the active screen.
    pub fn status_hint(&self) -> &'static str {
        match self.active {
            ScreenId::Lobby => self.lobby.status_hint(&self.session),
            ScreenId::Game => self.game.status_hint(&self.session),
        }
    }
}
