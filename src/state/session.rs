//! The session state record.
//!
//! Transient and in-memory only: everything resets when the process restarts.

use super::screen::{select_view, ScreenId, View};

/// Title shown on the streaming overlay when no launch is pending.
pub const FALLBACK_STREAM_TITLE: &str = "Your Game";

/// All runtime-mutable UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Screen selected through navigation.
    pub current_screen: ScreenId,
    /// Whether the streaming overlay is up.
    pub is_streaming: bool,
    /// Library search text, shared by the Steam and local libraries.
    pub search_query: String,
    /// Title of the game whose launch delay has not elapsed yet.
    pub launching_game: Option<String>,
    /// Never set yet: there is no sign-in flow.
    pub logged_in: bool,
    /// Steam account link toggle.
    pub steam_connected: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view to draw right now.
    pub fn current_view(&self) -> View {
        select_view(self.current_screen, self.is_streaming)
    }

    pub fn navigate(&mut self, screen: ScreenId) {
        self.current_screen = screen;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Record `title` as launching and raise the streaming overlay in one step.
    ///
    /// A launch still pending is replaced. Its timer keeps running and clears
    /// whatever marker is set when it fires. Returns the replaced title.
    pub fn begin_launch(&mut self, title: &str) -> Option<String> {
        self.is_streaming = true;
        self.launching_game.replace(title.to_string())
    }

    /// Clear the launching marker, whatever else has happened since.
    ///
    /// Returns the title that was pending, if any.
    pub fn finish_launch(&mut self) -> Option<String> {
        self.launching_game.take()
    }

    /// Drop the streaming overlay. Returns whether a stream was active.
    pub fn end_stream(&mut self) -> bool {
        std::mem::replace(&mut self.is_streaming, false)
    }

    /// Flip the Steam link flag and return the new value.
    pub fn toggle_steam(&mut self) -> bool {
        self.steam_connected = !self.steam_connected;
        self.steam_connected
    }

    pub fn is_launching(&self) -> bool {
        self.launching_game.is_some()
    }

    /// Whether `title` is the game currently connecting.
    pub fn is_launching_title(&self, title: &str) -> bool {
        self.launching_game.as_deref() == Some(title)
    }

    /// Title for the streaming overlay.
    pub fn streaming_title(&self) -> &str {
        self.launching_game
            .as_deref()
            .unwrap_or(FALLBACK_STREAM_TITLE)
    }
}
