use crate::state::ScreenId;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Top bar: back marker, screen title, connectivity and settings shortcut
pub struct Header;

impl Header {
    /// Height the header needs
    pub const HEIGHT: u16 = 3;

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme().border_style())
            .padding(Padding::horizontal(1))
    }

    /// Title and status columns inside the header
    fn columns(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(24)])
            .split(Self::block().inner(area));
        (chunks[0], chunks[1])
    }

    fn title_line(screen: ScreenId) -> Line<'static> {
        let t = theme();
        let mut title = Vec::new();
        if screen.shows_back() {
            title.push(Span::styled("‹ ", t.muted_style()));
        }
        title.push(Span::styled(screen.header_title(), t.title_style()));
        Line::from(title)
    }

    fn settings_span(settings_key: &str) -> Span<'static> {
        Span::styled(format!("⚙ [{}]", settings_key), theme().text_style())
    }

    /// Render the header for `screen`
    ///
    /// `settings_key` is the display form of the settings shortcut.
    pub fn render(frame: &mut Frame, area: Rect, screen: ScreenId, settings_key: &str) -> Result<()> {
        let t = theme();
        frame.render_widget(Self::block(), area);
        let (left, right) = Self::columns(area);

        frame.render_widget(Paragraph::new(Self::title_line(screen)), left);

        let status = Line::from(vec![
            Span::styled("wifi ●", t.success_style()),
            Span::raw("  "),
            Self::settings_span(settings_key),
        ]);
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Right),
            right,
        );

        Ok(())
    }

    /// Where a click on the header leads: the back marker and title go Home,
    /// the gear opens Settings.
    pub fn hit_test(
        area: Rect,
        screen: ScreenId,
        settings_key: &str,
        column: u16,
        row: u16,
    ) -> Option<ScreenId> {
        let position = Position::new(column, row);
        let (left, right) = Self::columns(area);

        let gear_width = u16::try_from(Self::settings_span(settings_key).width())
            .unwrap_or(u16::MAX)
            .min(right.width);
        let gear = Rect::new(right.right() - gear_width, right.y, gear_width, 1);
        if gear.contains(position) {
            return Some(ScreenId::Settings);
        }

        if screen.shows_back() {
            let title_width = u16::try_from(Self::title_line(screen).width())
                .unwrap_or(u16::MAX)
                .min(left.width);
            let back = Rect::new(left.x, left.y, title_width, 1);
            if back.contains(position) {
                return Some(ScreenId::Home);
            }
        }
        None
    }
}
