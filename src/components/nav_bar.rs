//! Bottom navigation bar (Home, Local, Settings).

use crate::state::ScreenId;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Entries in display order
pub const NAV_ENTRIES: [(ScreenId, &str, &str); 3] = [
    (ScreenId::Home, "◆", "Home"),
    (ScreenId::LocalLibrary, "▤", "Local"),
    (ScreenId::Settings, "⚙", "Settings"),
];

pub struct NavBar;

impl NavBar {
    pub const HEIGHT: u16 = 2;

    fn entry_areas(area: Rect) -> Vec<Rect> {
        let inner = Self::block().inner(area);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(inner)
            .to_vec()
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme().border_style())
    }

    pub fn render(frame: &mut Frame, area: Rect, current: ScreenId) -> Result<()> {
        let t = theme();
        frame.render_widget(Self::block(), area);

        for ((screen, icon, label), cell) in NAV_ENTRIES.iter().zip(Self::entry_areas(area)) {
            let style = if *screen == current {
                t.accent_style()
            } else {
                t.muted_style()
            };
            let line = Line::from(Span::styled(format!("{} {}", icon, label), style));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), cell);
        }
        Ok(())
    }

    /// Which entry, if any, sits under a mouse click
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<ScreenId> {
        let position = Position::new(column, row);
        NAV_ENTRIES
            .iter()
            .zip(Self::entry_areas(area))
            .find(|(_, cell)| cell.contains(position))
            .map(|((screen, _, _), _)| *screen)
    }

    /// Next entry after `current` in the bar. Screens not on the bar count as Home.
    pub fn cycle(current: ScreenId, forward: bool) -> ScreenId {
        let index = NAV_ENTRIES
            .iter()
            .position(|(screen, _, _)| *screen == current)
            .unwrap_or(0);
        let len = NAV_ENTRIES.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        NAV_ENTRIES[next].0
    }
}
