//! Theme and style system for GameHub
//!
//! Provides consistent styling across screens with dark, light and
//! no-color variants.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (`NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

impl ThemeType {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::NoColor => "No Color",
        }
    }

    /// Value written to the config file
    pub fn to_config_string(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }

    /// Next theme in the settings cycle
    pub fn next(&self) -> ThemeType {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::NoColor,
            ThemeType::NoColor => ThemeType::Dark,
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Brand accent (status heading, active navigation entry)
    pub accent: Color,
    /// Buttons and focused borders
    pub primary: Color,
    /// Secondary buttons (Test Connection)
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    /// Offline/disconnected states and the End Stream button
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Streaming overlay background
    pub stream_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            accent: Color::LightGreen,
            primary: Color::LightBlue,
            secondary: Color::Indexed(99),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::LightBlue,
            highlight_bg: Color::Indexed(237),
            stream_bg: Color::Black,
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            accent: Color::Green,
            primary: Color::Blue,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            stream_bg: Color::Black,
        }
    }

    /// Style helpers below avoid setting fg/bg in this mode
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            accent: Color::Reset,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            stream_bg: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    fn fg(&self, color: Color) -> Style {
        if self.is_plain() {
            Style::default()
        } else {
            Style::default().fg(color)
        }
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        self.fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        self.fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn success_style(&self) -> Style {
        self.fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        self.fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        self.fg(self.error)
    }

    pub fn border_style(&self) -> Style {
        self.fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Selected row / focused tile
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled button in the given color
    pub fn button_style(&self, color: Color) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style(&self) -> Style {
        self.muted_style()
    }

    /// Background of the streaming overlay
    pub fn stream_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.stream_bg).fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("whatever".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_theme_cycle_round_trips_config_string() {
        let mut t = ThemeType::Dark;
        for _ in 0..3 {
            assert_eq!(t.to_config_string().parse::<ThemeType>().unwrap(), t);
            t = t.next();
        }
        assert_eq!(t, ThemeType::Dark);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [
            t.highlight_style(),
            t.button_style(t.primary),
            t.accent_style(),
            t.error_style(),
        ] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }
}
