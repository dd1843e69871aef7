//! Screen identifiers and view selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenId {
    #[default]
    Home,
    SteamLibrary,
    LocalLibrary,
    Settings,
}

impl ScreenId {
    /// All screens in navigation order.
    pub fn all() -> [ScreenId; 4] {
        [
            ScreenId::Home,
            ScreenId::SteamLibrary,
            ScreenId::LocalLibrary,
            ScreenId::Settings,
        ]
    }

    /// Parse a screen identifier. Anything unrecognised falls back to `Home`.
    ///
    /// Accepts the canonical names (`"SteamLibrary"`) as well as lowercase,
    /// kebab-case and snake_case spellings (`"steam-library"`).
    pub fn from_name(name: &str) -> ScreenId {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "home" => ScreenId::Home,
            "steamlibrary" => ScreenId::SteamLibrary,
            "locallibrary" => ScreenId::LocalLibrary,
            "settings" => ScreenId::Settings,
            _ => ScreenId::Home,
        }
    }

    /// Canonical identifier.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::SteamLibrary => "SteamLibrary",
            ScreenId::LocalLibrary => "LocalLibrary",
            ScreenId::Settings => "Settings",
        }
    }

    /// Title shown in the header bar.
    pub fn header_title(&self) -> &'static str {
        match self {
            ScreenId::Home => "GameHub",
            ScreenId::SteamLibrary => "Steam Library",
            ScreenId::LocalLibrary => "Local PC Games",
            ScreenId::Settings => "Settings",
        }
    }

    /// Whether the header shows a back control (back always goes Home).
    pub fn shows_back(&self) -> bool {
        !matches!(self, ScreenId::Home)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What actually gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    SteamLibrary,
    LocalLibrary,
    Settings,
    /// Full-screen overlay, replaces the header/nav chrome.
    Streaming,
}

/// Pick the view for the current screen. Streaming always wins.
pub fn select_view(screen: ScreenId, is_streaming: bool) -> View {
    if is_streaming {
        return View::Streaming;
    }
    match screen {
        ScreenId::Home => View::Home,
        ScreenId::SteamLibrary => View::SteamLibrary,
        ScreenId::LocalLibrary => View::LocalLibrary,
        ScreenId::Settings => View::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_identifiers() {
        for screen in ScreenId::all() {
            assert_eq!(ScreenId::from_name(screen.name()), screen);
        }
        assert_eq!(ScreenId::from_name("steam-library"), ScreenId::SteamLibrary);
        assert_eq!(ScreenId::from_name("local_library"), ScreenId::LocalLibrary);
        assert_eq!(ScreenId::from_name(" SETTINGS "), ScreenId::Settings);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_home() {
        assert_eq!(ScreenId::from_name("Profile"), ScreenId::Home);
        assert_eq!(ScreenId::from_name(""), ScreenId::Home);
        assert_eq!(
            select_view(ScreenId::from_name("Streaming"), false),
            View::Home
        );
    }

    #[test]
    fn test_streaming_overrides_every_screen() {
        for screen in ScreenId::all() {
            assert_eq!(select_view(screen, true), View::Streaming);
        }
    }

    #[test]
    fn test_select_view_without_streaming() {
        assert_eq!(select_view(ScreenId::Home, false), View::Home);
        assert_eq!(select_view(ScreenId::SteamLibrary, false), View::SteamLibrary);
        assert_eq!(select_view(ScreenId::LocalLibrary, false), View::LocalLibrary);
        assert_eq!(select_view(ScreenId::Settings, false), View::Settings);
    }

    #[test]
    fn test_header_metadata() {
        assert_eq!(ScreenId::Home.header_title(), "GameHub");
        assert!(!ScreenId::Home.shows_back());
        assert_eq!(ScreenId::LocalLibrary.header_title(), "Local PC Games");
        assert!(ScreenId::Settings.shows_back());
    }
}
