//! Screen trait and associated types.
//!
//! Screens own their local UI state (selection, search cursor) but never
//! touch the session state. They read it through the context objects and
//! return a [`ScreenAction`] that the app applies.

use crate::config::Config;
use crate::keymap::Action;
use crate::state::{ScreenId, SessionState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources available while rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub session: &'a SessionState,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionState) -> Self {
        Self { config, session }
    }
}

/// Read-only resources available while handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub session: &'a SessionState,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionState) -> Self {
        Self { config, session }
    }

    /// Resolve a key event through the configured keymap.
    pub fn action_for(&self, key: &crossterm::event::KeyEvent) -> Option<Action> {
        self.config.keymap.get_action(key.code, key.modifiers)
    }
}

/// What a screen asks the app to do after an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Nothing to do.
    #[default]
    None,
    /// Switch to another screen.
    Navigate(ScreenId),
    /// Start the simulated launch of a game.
    Launch { title: String },
    /// Leave the streaming overlay.
    EndStream,
    /// Flip the Steam account link.
    ToggleSteam,
    /// Replace the shared library search text.
    SetSearch(String),
    /// Try to reach the companion app.
    TestConnection,
    /// Move to the next color theme.
    CycleTheme,
    Quit,
}

/// A self-contained screen controller.
pub trait Screen {
    /// Draw the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// When true, global shortcuts are disabled so the user can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is navigated to.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Footer hints as (label, action) pairs.
    fn footer_hints(&self) -> Vec<(&'static str, Action)> {
        Vec::new()
    }
}
