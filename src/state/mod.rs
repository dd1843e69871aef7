//! Application state management.
//!
//! All runtime-mutable state lives in a single [`SessionState`] record that
//! the app owns and mutates on the UI thread. Screens never mutate it
//! directly; they return a [`ScreenAction`](crate::screens::ScreenAction)
//! that the app applies.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 SessionState                  │
//! ├──────────────────────────────────────────────┤
//! │  current_screen: ScreenId   ──┐               │
//! │  is_streaming:   bool       ──┴─> select_view │
//! │  search_query:   String                       │
//! │  launching_game: Option<String>               │
//! │  logged_in / steam_connected: bool            │
//! └──────────────────────────────────────────────┘
//! ```

pub mod screen;
pub mod session;

pub use screen::{select_view, ScreenId, View};
pub use session::SessionState;
