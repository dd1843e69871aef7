use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key hint line at the bottom of the window
pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = 2;

    /// Render `text` as "Label: keys | Label: keys", coloring labels and keys
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<()> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.muted_style()));
                spans.push(Span::styled(keys.to_string(), t.accent_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );

        Ok(())
    }
}
