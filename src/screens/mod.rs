//! Screen controllers.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                           │
//! │   view = select_view(current_screen, is_streaming)    │
//! │   match view {                                        │
//! │     Home         => home.handle_event(..)             │
//! │     SteamLibrary => steam_library.handle_event(..)    │
//! │     LocalLibrary => local_library.handle_event(..)    │
//! │     Settings     => settings.handle_event(..)         │
//! │     Streaming    => streaming.handle_event(..)        │
//! │   }                 └──> ScreenAction ──> SessionState │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod home;
pub mod library;
pub mod screen_trait;
pub mod settings;
pub mod streaming;

pub use home::HomeScreen;
pub use library::LibraryScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use settings::SettingsScreen;
pub use streaming::StreamingScreen;
