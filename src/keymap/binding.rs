//! Key bindings and key-string parsing ("ctrl+c", "backtab", "/").

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Maps one key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string, e.g. "j", "down", "ctrl+c"
    pub key: String,
    pub action: Action,
}

/// A key string resolved to crossterm types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Normalize an incoming key event so it compares equal to a parsed binding.
    ///
    /// Terminals report SHIFT alongside already-shifted characters ('?', 'G')
    /// and alongside BackTab; bindings never spell that modifier out.
    pub fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self { code, modifiers }
    }
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Whether this binding matches a key event. Unparseable bindings never match.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match parse_key_string(&self.key) {
            Ok(parsed) => parsed == ParsedKey::from_event(code, modifiers),
            Err(_) => false,
        }
    }

    /// Display form, e.g. "Ctrl+C"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse a key string like "ctrl+alt+x" or "shift+tab"
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    // "+" on its own is a key, not a separator
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let mut parts: Vec<&str> = key.split('+').map(str::trim).collect();
    let key_part = parts.pop().unwrap_or_default();

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    // shift+tab is what people write, BackTab is what terminals send
    if key_part == "tab" && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(ParsedKey {
            code: KeyCode::BackTab,
            modifiers: modifiers.difference(KeyModifiers::SHIFT),
        });
    }

    Ok(ParsedKey {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for the footer ("ctrl+c" -> "Ctrl+C", "up" -> "↑")
pub fn format_key_display(key: &str) -> String {
    if key.trim() == "+" {
        return "+".to_string();
    }
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                _ if part.len() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_special_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("/").unwrap().code, KeyCode::Char('/'));
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+c").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);

        let parsed = parse_key_string("ctrl+alt+x").unwrap();
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        let parsed = parse_key_string("shift+tab").unwrap();
        assert_eq!(parsed.code, KeyCode::BackTab);
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("nope").is_err());
    }

    #[test]
    fn test_matches_ignores_reported_shift() {
        let help = KeyBinding::new("?", Action::Search);
        assert!(help.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));

        let back = KeyBinding::new("shift+tab", Action::PrevTab);
        assert!(back.matches(KeyCode::BackTab, KeyModifiers::SHIFT));

        let quit = KeyBinding::new("ctrl+c", Action::Quit);
        assert!(quit.matches(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!quit.matches(KeyCode::Char('c'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("esc"), "Esc");
        assert_eq!(format_key_display("/"), "/");
    }
}
