//! Settings screen: Steam account link, PC connection and theme.

use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, Theme, ThemeType};
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, ListState, Paragraph, Wrap};

pub const CONNECT_STEAM_LABEL: &str = "Connect Steam Account";
pub const DISCONNECT_STEAM_LABEL: &str = "Steam Connected (Disconnect)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsItem {
    SteamAccount,
    TestConnection,
    Theme,
}

impl SettingsItem {
    const ALL: [SettingsItem; 3] = [
        SettingsItem::SteamAccount,
        SettingsItem::TestConnection,
        SettingsItem::Theme,
    ];

    fn action(&self) -> ScreenAction {
        match self {
            SettingsItem::SteamAccount => ScreenAction::ToggleSteam,
            SettingsItem::TestConnection => ScreenAction::TestConnection,
            SettingsItem::Theme => ScreenAction::CycleTheme,
        }
    }
}

pub struct SettingsScreen {
    list_state: ListState,
    /// Button rows from the last render, in `SettingsItem::ALL` order
    button_areas: [Rect; 3],
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            button_areas: [Rect::default(); 3],
        }
    }

    fn selected(&self) -> SettingsItem {
        let index = self.list_state.selected().unwrap_or(0);
        SettingsItem::ALL[index.min(SettingsItem::ALL.len() - 1)]
    }

    /// A button line, highlighted when its item is selected
    fn button(&self, item: SettingsItem, label: String, color: Color) -> Line<'static> {
        let t = theme();
        let focused = self.selected() == item;
        let marker = if focused { "» " } else { "  " };
        let style = if focused {
            t.button_style(color)
        } else {
            t.text_style()
        };
        Line::from(vec![
            Span::styled(marker, t.accent_style()),
            Span::styled(format!("[ {} ]", label), style),
        ])
    }

    /// Label and color of the Steam button: green once linked
    fn steam_button(connected: bool, t: &Theme) -> (&'static str, Color) {
        if connected {
            (DISCONNECT_STEAM_LABEL, t.success)
        } else {
            (CONNECT_STEAM_LABEL, t.primary)
        }
    }

    /// One-row click target for the line at `line` inside a section block
    fn button_row(block_area: Rect, line: u16) -> Rect {
        let inner = Self::section("").inner(block_area);
        if line >= inner.height {
            return Rect::default();
        }
        Rect::new(inner.x, inner.y + line, inner.width, 1)
    }

    fn item_at(&self, position: Position) -> Option<usize> {
        self.button_areas.iter().position(|a| a.contains(position))
    }

    fn section(title: &str) -> Block<'static> {
        let t = theme();
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Span::styled(format!(" {} ", title), t.title_style()))
    }
}

impl Screen for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled("Application Settings", t.title_style())),
            chunks[0],
        );

        let (steam_label, steam_color) = Self::steam_button(ctx.session.steam_connected, &t);
        let account = vec![
            self.button(
                SettingsItem::SteamAccount,
                steam_label.to_string(),
                steam_color,
            ),
            Line::from(Span::styled(
                "Connecting Steam requires an API key and a trusted connection to your PC.",
                t.muted_style(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(account)
                .block(Self::section("Account Linking"))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );

        let connection = vec![
            Line::from(vec![
                Span::styled("PC IP Address: ", t.text_style()),
                Span::styled(ctx.config.companion.address.clone(), t.accent_style()),
            ]),
            Line::from(vec![
                Span::styled("Status: ", t.text_style()),
                Span::styled("Disconnected", t.error_style()),
            ]),
            self.button(
                SettingsItem::TestConnection,
                "Test Connection".to_string(),
                t.secondary,
            ),
        ];
        frame.render_widget(
            Paragraph::new(connection).block(Self::section("PC Connection")),
            chunks[2],
        );

        let current: ThemeType = ctx.config.theme.parse().unwrap_or_default();
        let appearance = vec![self.button(
            SettingsItem::Theme,
            format!("Theme: {}", current.name()),
            t.primary,
        )];
        frame.render_widget(
            Paragraph::new(appearance).block(Self::section("Appearance")),
            chunks[3],
        );

        self.button_areas = [
            Self::button_row(chunks[1], 0),
            Self::button_row(chunks[2], 2),
            Self::button_row(chunks[3], 0),
        ];
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let key = match event {
            Event::Key(key) => key,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                return Ok(match self.item_at(position) {
                    Some(index) => {
                        self.list_state.select(Some(index));
                        self.selected().action()
                    }
                    None => ScreenAction::None,
                });
            }
            _ => return Ok(ScreenAction::None),
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let total = SettingsItem::ALL.len();
        Ok(match ctx.action_for(&key) {
            Some(Action::MoveUp) => {
                self.list_state.select_previous_wrap(total);
                ScreenAction::None
            }
            Some(Action::MoveDown) => {
                self.list_state.select_next_wrap(total);
                ScreenAction::None
            }
            Some(Action::Confirm) => self.selected().action(),
            _ => ScreenAction::None,
        })
    }

    fn footer_hints(&self) -> Vec<(&'static str, Action)> {
        vec![
            ("Navigate", Action::MoveDown),
            ("Select", Action::Confirm),
            ("Back", Action::Back),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::screens::test_support::{click, key, render_to_string};
    use crate::state::SessionState;
    use crossterm::event::KeyCode;

    #[test]
    fn test_renders_sections() {
        let mut screen = SettingsScreen::new();
        let text = render_to_string(&mut screen, &Config::default(), &SessionState::new(), 80, 24);
        assert!(text.contains("Application Settings"));
        assert!(text.contains(CONNECT_STEAM_LABEL));
        assert!(text.contains("192.168.1.100"));
        assert!(text.contains("Status: Disconnected"));
        assert!(text.contains("Test Connection"));
        assert!(text.contains("Theme: Dark"));
    }

    #[test]
    fn test_label_follows_steam_link() {
        let mut session = SessionState::new();
        session.toggle_steam();
        let mut screen = SettingsScreen::new();
        let text = render_to_string(&mut screen, &Config::default(), &session, 80, 24);
        assert!(text.contains(DISCONNECT_STEAM_LABEL));
        assert!(!text.contains(CONNECT_STEAM_LABEL));
    }

    #[test]
    fn test_items_map_to_actions() {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session);
        let mut screen = SettingsScreen::new();

        let enter = || key(KeyCode::Enter);
        assert_eq!(
            screen.handle_event(enter(), &ctx).unwrap(),
            ScreenAction::ToggleSteam
        );
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        assert_eq!(
            screen.handle_event(enter(), &ctx).unwrap(),
            ScreenAction::TestConnection
        );
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        assert_eq!(
            screen.handle_event(enter(), &ctx).unwrap(),
            ScreenAction::CycleTheme
        );
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        assert_eq!(
            screen.handle_event(enter(), &ctx).unwrap(),
            ScreenAction::ToggleSteam
        );
    }

    #[test]
    fn test_custom_companion_address() {
        let mut config = Config::default();
        config.companion.address = "10.0.0.7".to_string();
        let mut screen = SettingsScreen::new();
        let text = render_to_string(&mut screen, &config, &SessionState::new(), 80, 24);
        assert!(text.contains("10.0.0.7"));
    }

    #[test]
    fn test_linked_steam_button_is_green() {
        let t = Theme::new(ThemeType::Dark);
        assert_eq!(
            SettingsScreen::steam_button(true, &t),
            (DISCONNECT_STEAM_LABEL, t.success)
        );
        assert_eq!(
            SettingsScreen::steam_button(false, &t),
            (CONNECT_STEAM_LABEL, t.primary)
        );
        assert_ne!(t.success, t.error);
    }

    #[test]
    fn test_clicking_buttons_triggers_items() {
        let config = Config::default();
        let session = SessionState::new();
        let mut screen = SettingsScreen::new();
        let text = render_to_string(&mut screen, &config, &session, 80, 24);

        let row_of = |needle: &str| {
            u16::try_from(text.lines().position(|l| l.contains(needle)).unwrap()).unwrap()
        };
        let ctx = ScreenContext::new(&config, &session);

        let action = screen
            .handle_event(click(6, row_of("Test Connection")), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::TestConnection);
        assert_eq!(screen.selected(), SettingsItem::TestConnection);

        let action = screen.handle_event(click(6, row_of("Theme:")), &ctx).unwrap();
        assert_eq!(action, ScreenAction::CycleTheme);

        let action = screen
            .handle_event(click(6, row_of(CONNECT_STEAM_LABEL)), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::ToggleSteam);

        // Section text that is not a button
        let action = screen
            .handle_event(click(6, row_of("PC IP Address")), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::None);
    }
}
