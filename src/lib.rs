//! GameHub - a terminal game streaming hub
//!
//! Browse a Steam library and local PC games, search them, and launch a
//! (simulated) stream from a companion app on your gaming PC.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod launch;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use catalog::{filter_games, Game, GameSource};
pub use config::Config;
pub use launch::{LaunchEvent, LaunchSimulator};
pub use state::{select_view, ScreenId, SessionState, View};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
