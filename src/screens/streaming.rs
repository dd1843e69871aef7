//! Full-screen streaming overlay.
//!
//! Drawn instead of the normal chrome whenever a stream is active. The title
//! comes from the pending launch and falls back to a generic name once the
//! launch has completed.

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Default)]
pub struct StreamingScreen;

impl StreamingScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for StreamingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.stream_style()), area);

        let status = if ctx.session.is_launching() {
            "Connecting to PC..."
        } else {
            "Streaming Live from PC..."
        };
        let end_key = ctx.config.keymap.key_for(Action::EndStream);

        let lines = vec![
            Line::from(Span::styled(
                ctx.session.streaming_title().to_string(),
                t.title_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(status, t.muted_style())),
            Line::from(""),
            Line::from(Span::styled("( A )", t.button_style(t.success))),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ End Stream [{}] ]", end_key.to_lowercase()),
                t.button_style(t.error),
            )),
        ];

        let panel = center_popup(area, 48, lines.len() as u16 + 2);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style())
                    .style(t.stream_style()),
            ),
            panel,
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        Ok(match ctx.action_for(&key) {
            Some(Action::EndStream | Action::Back) => ScreenAction::EndStream,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::screens::test_support::{key, render_to_string};
    use crate::state::SessionState;
    use crossterm::event::KeyCode;

    #[test]
    fn test_shows_launching_title() {
        let mut session = SessionState::new();
        session.begin_launch("Hades (Local)");
        let mut screen = StreamingScreen::new();
        let text = render_to_string(&mut screen, &Config::default(), &session, 60, 20);
        assert!(text.contains("Hades (Local)"));
        assert!(text.contains("Connecting to PC..."));
        assert!(text.contains("End Stream [e]"));
    }

    #[test]
    fn test_falls_back_after_launch_completes() {
        let mut session = SessionState::new();
        session.begin_launch("Dota 2");
        session.finish_launch();
        let mut screen = StreamingScreen::new();
        let text = render_to_string(&mut screen, &Config::default(), &session, 60, 20);
        assert!(text.contains("Your Game"));
        assert!(text.contains("Streaming Live from PC..."));
    }

    #[test]
    fn test_end_stream_keys() {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = StreamingScreen::new();
        assert_eq!(
            screen.handle_event(key(KeyCode::Char('e')), &ctx).unwrap(),
            ScreenAction::EndStream
        );
        assert_eq!(
            screen.handle_event(key(KeyCode::Esc), &ctx).unwrap(),
            ScreenAction::EndStream
        );
        assert_eq!(
            screen.handle_event(key(KeyCode::Char('x')), &ctx).unwrap(),
            ScreenAction::None
        );
    }
}
