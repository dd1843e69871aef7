//! Shared test utilities for the workflow integration tests.
//!
//! Provides `TestEnv`: an isolated config directory plus an `App` wired to a
//! short launch delay, cleaned up automatically via `TempDir`.
//!
//! Tests that point `GAMEHUB_CONFIG_DIR` at the temp dir hold a global lock
//! while the override is in place, so they never race each other.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gamehub::config::Config;
use gamehub::utils::path::CONFIG_DIR_ENV;
use gamehub::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;
use tokio::runtime::Handle;

/// Launch delay used by workflow tests
pub const TEST_LAUNCH_DELAY_MS: u64 = 20;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Restores `GAMEHUB_CONFIG_DIR` when dropped.
struct EnvGuard {
    old_config_dir: Option<String>,
    lock: MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_config_dir {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}

pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
    env_guard: Option<EnvGuard>,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_dir = temp_dir.path().join("config");
        Self {
            temp_dir,
            config_dir,
            env_guard: None,
        }
    }

    /// Point `GAMEHUB_CONFIG_DIR` at this environment until dropped.
    pub fn with_env_override(mut self) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let old_config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        std::env::set_var(CONFIG_DIR_ENV, &self.config_dir);
        self.env_guard = Some(EnvGuard {
            old_config_dir,
            lock,
        });
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Write `content` as the config file.
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("create config dir");
        std::fs::write(self.config_path(), content).expect("write config");
    }

    /// Build an app on the current tokio runtime with a short launch delay.
    pub fn app(&self) -> App {
        let config = Config {
            launch_delay_ms: TEST_LAUNCH_DELAY_MS,
            ..Config::default()
        };
        App::new(config, Some(self.config_path()), Handle::current())
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Row of the first rendered line containing `text`
pub fn row_of(screen: &str, text: &str) -> u16 {
    let row = screen
        .lines()
        .position(|line| line.contains(text))
        .unwrap_or_else(|| panic!("'{}' not on screen", text));
    u16::try_from(row).expect("row fits in u16")
}

/// Feed each character of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).expect("handle key");
    }
}

/// Draw the app into an in-memory terminal and return the rows joined by newlines.
pub fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| app.draw(frame).expect("draw"))
        .expect("draw frame");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Wait for pending launch timers, then let the app apply them.
pub async fn settle_launches(app: &mut App) {
    tokio::time::sleep(std::time::Duration::from_millis(TEST_LAUNCH_DELAY_MS * 10)).await;
    app.tick();
}
