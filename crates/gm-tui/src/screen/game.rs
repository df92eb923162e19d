//! The game screen: gallows, reveal pattern, and on-screen keyboard.

use crossterm::event::{KeyCode, KeyEvent};
use gm_core::{GameSession, KeyState, Phase, Round, Winner, stage};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Screen, Transition};

/// Letters per keyboard row.
const KEYBOARD_COLS: usize = 13;

/// The game screen. All round state lives in the session; the screen itself
/// is stateless.
#[derive(Default)]
pub struct GameScreen;

impl GameScreen {
    /// Create the game screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for GameScreen {
    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Esc => {
                session.reset_to_lobby();
                Transition::ToLobby
            }
            KeyCode::Enter if session.phase() == Phase::RoundOver => {
                session.reset_to_lobby();
                Transition::ToLobby
            }
            KeyCode::Char(ch) => {
                // Repeats, non-letters, and post-round guesses are no-ops.
                let _ = session.guess(ch);
                Transition::None
            }
            _ => Transition::None,
        }
    }

    fn draw(&self, session: &GameSession, frame: &mut Frame, area: Rect) {
        let Some(round) = session.round() else {
            let empty = Paragraph::new("No round in progress").alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Category
                Constraint::Length(9), // Gallows
                Constraint::Length(2), // Reveal pattern
                Constraint::Length(3), // Keyboard
                Constraint::Min(2),    // Winner banner
            ])
            .split(area);

        let category = Paragraph::new(format!("CATEGORY: {}", round.category().to_uppercase()))
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center);
        frame.render_widget(category, chunks[0]);

        let gallows = Paragraph::new(stage::drawing(round.wrong_guesses()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(
                        " Wrong: {}/{} ",
                        round.wrong_guesses(),
                        gm_core::MAX_WRONG_GUESSES
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(gallows, chunks[1]);

        let reveal = Paragraph::new(round.reveal().to_string())
            .style(Style::default().fg(Color::White).bold())
            .alignment(Alignment::Center);
        frame.render_widget(reveal, chunks[2]);

        frame.render_widget(keyboard_widget(round), chunks[3]);

        if let Some(winner) = round.outcome() {
            let color = match winner {
                Winner::Player => Color::Green,
                Winner::Opponent => Color::Red,
            };
            let banner = vec![
                Line::from(Span::styled(
                    format!("WINNER: {winner}"),
                    Style::default().fg(color).bold(),
                )),
                Line::from(Span::styled(
                    "Press Enter for the lobby",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let widget = Paragraph::new(banner).alignment(Alignment::Center);
            frame.render_widget(widget, chunks[4]);
        }
    }

    fn status_hint(&self, session: &GameSession) -> &'static str {
        if session.phase() == Phase::RoundOver {
            "Enter:lobby  ?:help  Ctrl+C:quit"
        } else {
            "A-Z:guess  Esc:abandon  ?:help  Ctrl+C:quit"
        }
    }
}

/// The on-screen keyboard: two rows of letters, used ones struck through.
fn keyboard_widget(round: &Round) -> Paragraph<'static> {
    let keyboard = round.keyboard();
    let rows: Vec<Line> = keyboard
        .chunks(KEYBOARD_COLS)
        .map(|chunk| {
            let spans: Vec<Span> = chunk
                .iter()
                .map(|(letter, state)| {
                    let style = match state {
                        KeyState::Available => Style::default().fg(Color::White),
                        KeyState::Used => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(rows).alignment(Alignment::Center)
}
