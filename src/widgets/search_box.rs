//! Search field for the library screens.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Prefix drawn before the query, in place of a magnifier icon
const SEARCH_PREFIX: &str = "/ ";

/// Renders a [`TextInput`] as a rounded search box with a placeholder.
pub struct SearchBox<'a> {
    input: &'a TextInput,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> SearchBox<'a> {
    pub fn new(input: &'a TextInput, placeholder: &'a str) -> Self {
        Self {
            input,
            placeholder,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'static> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
    }

    fn line(&self) -> Line<'a> {
        let t = theme();
        let body = if self.input.is_empty() {
            Span::styled(self.placeholder, t.muted_style())
        } else {
            Span::styled(self.input.text().to_string(), t.text_style())
        };
        Line::from(vec![Span::styled(SEARCH_PREFIX, t.muted_style()), body])
    }

    /// Terminal position of the cursor inside `area`
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let offset = (SEARCH_PREFIX.len() + self.input.cursor()) as u16;
        Position::new(
            inner.x + offset.min(inner.width.saturating_sub(1)),
            inner.y,
        )
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .block(self.block())
            .render(area, buf);
    }
}

/// Renders a [`SearchBox`] and places the terminal cursor when it is focused.
pub trait SearchBoxExt {
    fn render_search_box(&mut self, widget: SearchBox, area: Rect);
}

impl SearchBoxExt for Frame<'_> {
    fn render_search_box(&mut self, widget: SearchBox, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
