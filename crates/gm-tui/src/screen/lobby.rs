//! The lobby screen: room grid and recent round results.

use crossterm::event::{KeyCode, KeyEvent};
use gm_core::lobby::ROOM_COUNT;
use gm_core::{GameSession, RoomStatus, Winner};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Screen, Transition};

/// Rooms per grid row.
const GRID_COLS: usize = 4;

/// How many finished rounds the lobby lists.
const RECENT_ROUNDS: usize = 5;

/// Lobby screen state: which room the cursor is on.
#[derive(Default)]
pub struct LobbyScreen {
    selected: usize,
}

impl LobbyScreen {
    /// Create the lobby screen with the cursor on the first room.
    pub fn new() -> Self {
        Self::default()
    }

    fn move_selection(&mut self, delta: isize) {
        let next = self.selected as isize + delta;
        if (0..ROOM_COUNT as isize).contains(&next) {
            self.selected = next as usize;
        }
    }
}

impl Screen for LobbyScreen {
    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') => Transition::Quit,
            KeyCode::Left => {
                self.move_selection(-1);
                Transition::None
            }
            KeyCode::Right => {
                self.move_selection(1);
                Transition::None
            }
            KeyCode::Up => {
                self.move_selection(-(GRID_COLS as isize));
                Transition::None
            }
            KeyCode::Down => {
                self.move_selection(GRID_COLS as isize);
                Transition::None
            }
            KeyCode::Enter => {
                let room = session.lobby().rooms()[self.selected];
                if room.status == RoomStatus::Open && session.start_round().is_ok() {
                    Transition::ToGame
                } else {
                    Transition::None
                }
            }
            _ => Transition::None,
        }
    }

    fn draw(&self, session: &GameSession, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(8), // Room grid (2 rows of 4)
                Constraint::Min(3),    // Recent rounds
            ])
            .split(area);

        let heading = Paragraph::new("Pick an open room to start a round")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(4)])
            .split(chunks[1]);

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(25); 4])
                .split(*row_area);

            for (col_idx, cell) in cells.iter().enumerate() {
                let idx = row_idx * GRID_COLS + col_idx;
                let room = session.lobby().rooms()[idx];

                let status_style = match room.status {
                    RoomStatus::Open => Style::default().fg(Color::Green).bold(),
                    RoomStatus::InGame => Style::default().fg(Color::Yellow),
                    RoomStatus::Full => Style::default().fg(Color::Red),
                };
                let border_style = if idx == self.selected {
                    Style::default().fg(Color::White).bold()
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let lines = vec![
                    Line::from(format!("Room {}", room.number)),
                    Line::from(Span::styled(room.status.to_string(), status_style)),
                ];
                let widget = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(border_style),
                    );
                frame.render_widget(widget, *cell);
            }
        }

        let history: Vec<Line> = session
            .history()
            .iter()
            .rev()
            .take(RECENT_ROUNDS)
            .map(|record| {
                let color = match record.winner {
                    Winner::Player => Color::Green,
                    Winner::Opponent => Color::Red,
                };
                Line::from(vec![
                    Span::styled(record.winner.to_string(), Style::default().fg(color).bold()),
                    Span::raw(format!(
                        "  {}/{}  ({} wrong)",
                        record.category, record.word, record.wrong_guesses
                    )),
                ])
            })
            .collect();

        let recent = Paragraph::new(history).block(
            Block::default()
                .title(" Recent Rounds ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(recent, chunks[2]);
    }

    fn status_hint(&self, _session: &GameSession) -> &'static str {
        "\u{2190}\u{2191}\u{2193}\u{2192}:select  Enter:join  ?:help  q:quit"
    }
}
