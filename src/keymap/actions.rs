//! Semantic actions that keys are bound to.

use serde::{Deserialize, Serialize};

/// Every user-triggerable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // ============ Selection ============
    /// Activate the selected item (Play, open tile, toggle setting)
    Confirm,
    /// Header back control / leave the current mode
    Back,

    // ============ Screens ============
    GoHome,
    GoSteamLibrary,
    GoLocalLibrary,
    GoSettings,
    /// Cycle forward through the bottom navigation bar
    NextTab,
    /// Cycle backward through the bottom navigation bar
    PrevTab,

    // ============ Library ============
    /// Focus the search field
    Search,
    /// Clear the search field
    ClearSearch,

    // ============ Streaming ============
    EndStream,

    // ============ Global ============
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serde_names() {
        assert_eq!(
            serde_json::to_string(&Action::GoSteamLibrary).unwrap(),
            "\"go_steam_library\""
        );
        let action: Action = serde_json::from_str("\"end_stream\"").unwrap();
        assert_eq!(action, Action::EndStream);
    }
}
