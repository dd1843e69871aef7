//! Keymap configuration
//!
//! A preset keymap plus user overrides loaded from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset. Overriding an action hides every preset key for it.
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Resolve a key event to an action
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides followed by the preset bindings they do not shadow
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer text for a screen, as "Label: keys" pairs separated by " | "
    pub fn footer(&self, hints: &[(&str, Action)]) -> String {
        let mut parts: Vec<String> = hints
            .iter()
            .map(|(label, action)| format!("{}: {}", label, self.key_for(*action)))
            .collect();
        parts.push(format!("Quit: {}", self.key_for(Action::Quit)));
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_override_shadows_preset_action() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::EndStream)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::EndStream)
        );
        // 'e' belonged to EndStream in the preset
        assert_eq!(keymap.get_action(KeyCode::Char('e'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
        assert_eq!(keymap.key_for(Action::MoveUp), "K");
    }

    #[test]
    fn test_footer_text() {
        let keymap = Keymap::default();
        let footer = keymap.footer(&[("Select", Action::Confirm), ("Back", Action::Back)]);
        assert_eq!(footer, "Select: Enter | Back: Esc | Quit: Q");
    }
}
