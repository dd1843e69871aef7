//! Home dashboard: companion status, library tiles and recent activity.

use crate::catalog::{self, GameSource};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenId;
use crate::styles::theme;
use crate::utils::format_relative_age;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// The two library tiles, left to right
const TILES: [(GameSource, ScreenId, &str); 2] = [
    (GameSource::Steam, ScreenId::SteamLibrary, "Steam Library"),
    (GameSource::Local, ScreenId::LocalLibrary, "Local PC Games"),
];

pub struct HomeScreen {
    selected_tile: usize,
    /// Tile rectangles from the last render, for mouse clicks
    tile_areas: [Rect; 2],
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            selected_tile: 0,
            tile_areas: [Rect::default(); 2],
        }
    }

    pub fn selected_tile(&self) -> usize {
        self.selected_tile
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let session = ctx.session;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Span::styled(" GameHub Status ", t.accent_style()));

        let account = if session.logged_in { "Signed in" } else { "Guest" };
        let steam = if session.steam_connected {
            Span::styled("Linked", t.success_style())
        } else {
            Span::styled("Not linked", t.muted_style())
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("⏻ ", t.error_style()),
                Span::styled("PC Companion App: ", t.text_style()),
                Span::styled("Offline", t.error_style().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("Account: ", t.text_style()),
                Span::styled(account, t.muted_style()),
                Span::styled("   Steam: ", t.text_style()),
                steam,
            ]),
            Line::from(Span::styled(
                "(A real-time connection check to your designated gaming PC would happen here.)",
                t.muted_style(),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_tiles(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(area);

        for (index, (source, _, label)) in TILES.iter().enumerate() {
            let selected = index == self.selected_tile;
            let cell = columns[index];
            self.tile_areas[index] = cell;

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if selected {
                    t.border_focused_style()
                } else {
                    t.border_style()
                });

            let icon = match source {
                GameSource::Steam => "🎮",
                GameSource::Local => "📁",
            };
            let count = catalog::games_for(*source).len();
            let lines = vec![
                Line::from(icon),
                Line::from(Span::styled(
                    *label,
                    if selected {
                        t.highlight_style()
                    } else {
                        t.title_style()
                    },
                )),
                Line::from(Span::styled(format!("({} Games)", count), t.muted_style())),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(block),
                cell,
            );
        }
    }

    fn render_activity(frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut lines = vec![
            Line::from(Span::styled("Latest Activity", t.title_style())),
            Line::from(""),
        ];
        let width = area.width as usize;
        for entry in catalog::recent_activity() {
            let age = format_relative_age(entry.age);
            let gap = width
                .saturating_sub(entry.description.chars().count() + age.chars().count())
                .max(1);
            lines.push(Line::from(vec![
                Span::styled(entry.description, t.text_style()),
                Span::raw(" ".repeat(gap)),
                Span::styled(age, t.muted_style()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn open_selected(&self) -> ScreenAction {
        ScreenAction::Navigate(TILES[self.selected_tile].1)
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_status(frame, chunks[0], ctx);
        self.render_tiles(frame, chunks[2]);
        Self::render_activity(frame, chunks[4]);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.action_for(&key) {
                    Some(
                        Action::MoveLeft | Action::MoveRight | Action::MoveUp | Action::MoveDown,
                    ) => {
                        self.selected_tile = (self.selected_tile + 1) % TILES.len();
                        Ok(ScreenAction::None)
                    }
                    Some(Action::Confirm) => Ok(self.open_selected()),
                    _ => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if let Some(index) = self.tile_areas.iter().position(|a| a.contains(position)) {
                    self.selected_tile = index;
                    return Ok(self.open_selected());
                }
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn footer_hints(&self) -> Vec<(&'static str, Action)> {
        vec![
            ("Select", Action::MoveRight),
            ("Open", Action::Confirm),
            ("Next tab", Action::NextTab),
        ]
    }
}
