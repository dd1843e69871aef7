//! Library screen, shared by the Steam and local PC game lists.
//!
//! Both instances read the same search text from the session, so a query
//! typed in one library is still applied when switching to the other.

use crate::catalog::{self, Game, GameSource};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::SessionState;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{ListStateExt, TextInput};
use crate::widgets::{SearchBox, SearchBoxExt};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

pub const EMPTY_LIBRARY_MESSAGE: &str = "No games found or library is empty.";

/// Rows taken by one game card, including the blank spacer line
const CARD_HEIGHT: u16 = 4;

pub struct LibraryScreen {
    source: GameSource,
    search: TextInput,
    search_focused: bool,
    list_state: ListState,
    placeholder: String,
    /// Search field and card list interiors from the last render, for mouse clicks
    search_area: Rect,
    cards_area: Rect,
}

impl LibraryScreen {
    pub fn new(source: GameSource) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            source,
            search: TextInput::new(),
            search_focused: false,
            list_state,
            placeholder: format!("Search {}...", source.library_name()),
            search_area: Rect::default(),
            cards_area: Rect::default(),
        }
    }

    pub fn source(&self) -> GameSource {
        self.source
    }

    /// Games of this library matching the shared search text
    fn visible(&self, session: &SessionState) -> Vec<&'static Game> {
        catalog::filter_games(&session.search_query, catalog::games_for(self.source))
    }

    fn selected_game(&self, session: &SessionState) -> Option<&'static Game> {
        let games = self.visible(session);
        self.list_state.selected().and_then(|i| games.get(i).copied())
    }

    fn game_item(game: &Game, session: &SessionState) -> ListItem<'static> {
        let t = theme();
        let marker = match game.source() {
            GameSource::Steam => Span::styled("  🎮 Steam", t.accent_style()),
            GameSource::Local => Span::styled("  📁 Local", t.muted_style()),
        };

        let button = if session.is_launching_title(game.title) {
            Span::styled("[ Connecting... ]", t.warning_style())
        } else if session.is_launching() {
            Span::styled("[ Play ]", t.disabled_style())
        } else {
            Span::styled("[ Play ]", t.button_style(t.primary))
        };

        ListItem::new(vec![
            Line::from(vec![Span::styled(game.title, t.title_style()), marker]),
            Line::from(vec![
                Span::styled(game.genre, t.text_style()),
                Span::styled(" · ", t.muted_style()),
                Span::styled(game.detail_line(), t.muted_style()),
            ]),
            Line::from(button),
            Line::from(""),
        ])
    }

    /// Index into the visible games of the card under a click
    fn card_at(&self, position: Position, total: usize) -> Option<usize> {
        if !self.cards_area.contains(position) {
            return None;
        }
        let row = position.y - self.cards_area.y;
        let index = self.list_state.offset() + usize::from(row / CARD_HEIGHT);
        (index < total).then_some(index)
    }

    fn clear_search(&mut self) -> ScreenAction {
        self.search.clear();
        self.list_state.select(Some(0));
        ScreenAction::SetSearch(String::new())
    }

    fn handle_search_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        // Chorded keys keep their bindings instead of being typed
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return match ctx.action_for(&key) {
                Some(Action::Quit) => ScreenAction::Quit,
                Some(Action::ClearSearch) => self.clear_search(),
                _ => ScreenAction::None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.search_focused = false;
                ScreenAction::None
            }
            other => {
                if self.search.handle_key(other) {
                    self.list_state.select(Some(0));
                    ScreenAction::SetSearch(self.search.text().to_string())
                } else {
                    ScreenAction::None
                }
            }
        }
    }
}

impl Screen for LibraryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        // The session owns the query; keep the field in step with it
        if self.search.text() != ctx.session.search_query {
            self.search.set_text(ctx.session.search_query.clone());
        }

        frame.render_search_box(
            SearchBox::new(&self.search, &self.placeholder).focused(self.search_focused),
            chunks[0],
        );
        self.search_area = chunks[0];

        let games = self.visible(ctx.session);
        self.list_state.clamp_to(games.len());

        if games.is_empty() {
            self.cards_area = Rect::default();
            frame.render_widget(
                Paragraph::new(Span::styled(EMPTY_LIBRARY_MESSAGE, t.muted_style()))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::NONE)),
                chunks[1],
            );
            return Ok(());
        }

        let items: Vec<ListItem> = games
            .iter()
            .map(|game| Self::game_item(game, ctx.session))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.search_focused {
                t.border_style()
            } else {
                t.border_focused_style()
            });
        self.cards_area = block.inner(chunks[1]);

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let key = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Mouse(mouse) => {
                let games = self.visible(ctx.session);
                let total = games.len();
                let position = Position::new(mouse.column, mouse.row);
                let action = match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        self.list_state.select_previous_wrap(total);
                        ScreenAction::None
                    }
                    MouseEventKind::ScrollDown => {
                        self.list_state.select_next_wrap(total);
                        ScreenAction::None
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        if self.search_area.contains(position) {
                            self.search_focused = true;
                            ScreenAction::None
                        } else if let Some(index) = self.card_at(position, total) {
                            // The whole card is clickable, even while Play is disabled
                            self.search_focused = false;
                            self.list_state.select(Some(index));
                            ScreenAction::Launch {
                                title: games[index].title.to_string(),
                            }
                        } else {
                            ScreenAction::None
                        }
                    }
                    _ => ScreenAction::None,
                };
                return Ok(action);
            }
            _ => return Ok(ScreenAction::None),
        };

        if self.search_focused {
            return Ok(self.handle_search_key(key, ctx));
        }

        let total = self.visible(ctx.session).len();
        let action = match ctx.action_for(&key) {
            Some(Action::Search) => {
                self.search_focused = true;
                ScreenAction::None
            }
            Some(Action::ClearSearch) => self.clear_search(),
            Some(Action::MoveUp) => {
                self.list_state.select_previous_wrap(total);
                ScreenAction::None
            }
            Some(Action::MoveDown) => {
                self.list_state.select_next_wrap(total);
                ScreenAction::None
            }
            Some(Action::Confirm) => self
                .selected_game(ctx.session)
                .map(|game| ScreenAction::Launch {
                    title: game.title.to_string(),
                })
                .unwrap_or_default(),
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        self.search_focused
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.search.set_text(ctx.session.search_query.clone());
        self.search_focused = false;
        self.list_state.clamp_to(self.visible(ctx.session).len());
        Ok(())
    }

    fn footer_hints(&self) -> Vec<(&'static str, Action)> {
        if self.search_focused {
            return vec![("Done", Action::Confirm)];
        }
        vec![
            ("Play", Action::Confirm),
            ("Search", Action::Search),
            ("Clear", Action::ClearSearch),
            ("Back", Action::Back),
        ]
    }
}
