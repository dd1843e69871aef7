//! Game catalog: the built-in Steam and local libraries, and the library filter.
//!
//! The libraries are static. Nothing here is ever created or destroyed at
//! runtime; screens only ever look at a filtered view of these lists.

use chrono::Duration;
use serde::Serialize;
use std::fmt;

/// Where a game comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSource {
    Steam,
    Local,
}

impl GameSource {
    /// Human-readable library name used in headers and the search placeholder.
    pub fn library_name(&self) -> &'static str {
        match self {
            GameSource::Steam => "Steam",
            GameSource::Local => "Local PC Games",
        }
    }
}

impl fmt::Display for GameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.library_name())
    }
}

/// Source-specific fields of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum GameDetail {
    /// Installed on the PC outside of Steam.
    Local { path: &'static str },
    /// Owned on the linked Steam account.
    Steam { playtime_hours: u32 },
}

/// A single entry of a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: &'static str,
    pub title: &'static str,
    pub genre: &'static str,
    #[serde(flatten)]
    pub detail: GameDetail,
}

impl Game {
    const fn local(
        id: &'static str,
        title: &'static str,
        path: &'static str,
        genre: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            genre,
            detail: GameDetail::Local { path },
        }
    }

    const fn steam(
        id: &'static str,
        title: &'static str,
        playtime_hours: u32,
        genre: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            genre,
            detail: GameDetail::Steam { playtime_hours },
        }
    }

    pub fn source(&self) -> GameSource {
        match self.detail {
            GameDetail::Local { .. } => GameSource::Local,
            GameDetail::Steam { .. } => GameSource::Steam,
        }
    }

    /// Secondary line shown on a card ("C:/Games/Hades", "500 hrs played").
    pub fn detail_line(&self) -> String {
        match &self.detail {
            GameDetail::Local { path } => (*path).to_string(),
            GameDetail::Steam { playtime_hours } => format!("{} hrs played", playtime_hours),
        }
    }
}

static LOCAL_GAMES: [Game; 3] = [
    Game::local("l1", "Cyberpunk 2077 (Local)", "C:/Games/CP77", "RPG"),
    Game::local("l2", "The Witcher 3 (Local)", "C:/Games/Witcher3", "RPG"),
    Game::local("l3", "Hades (Local)", "C:/Games/Hades", "Roguelite"),
];

static STEAM_GAMES: [Game; 3] = [
    Game::steam("s1", "Dota 2", 500, "MOBA"),
    Game::steam("s2", "Apex Legends", 200, "FPS"),
    Game::steam("s3", "Terraria", 120, "Sandbox"),
];

/// Games installed directly on the PC.
pub fn local_games() -> &'static [Game] {
    &LOCAL_GAMES
}

/// Games on the Steam account.
pub fn steam_games() -> &'static [Game] {
    &STEAM_GAMES
}

/// The full list for a source.
pub fn games_for(source: GameSource) -> &'static [Game] {
    match source {
        GameSource::Steam => steam_games(),
        GameSource::Local => local_games(),
    }
}

/// Find a game by exact title (case-insensitive) across both libraries.
pub fn find_by_title(title: &str) -> Option<&'static Game> {
    let needle = title.trim().to_lowercase();
    steam_games()
        .iter()
        .chain(local_games())
        .find(|g| g.title.to_lowercase() == needle)
}

/// Return the games whose title contains `query`, ignoring case.
///
/// Order is preserved and an empty query returns every game.
pub fn filter_games<'a>(query: &str, games: &'a [Game]) -> Vec<&'a Game> {
    let query = query.to_lowercase();
    games
        .iter()
        .filter(|game| game.title.to_lowercase().contains(&query))
        .collect()
}

/// One line of the "Latest Activity" feed on the home screen.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub description: &'static str,
    pub age: Duration,
}

/// The recent activity feed. Static until a companion app can report real events.
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            description: "Played Cyberpunk 2077",
            age: Duration::hours(2),
        },
        ActivityEntry {
            description: "Steam account synced",
            age: Duration::hours(5),
        },
    ]
}
