use crate::keymap::Keymap;
use crate::launch::DEFAULT_LAUNCH_DELAY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// How long a simulated launch takes before it reports success
    #[serde(default = "default_launch_delay_ms")]
    pub launch_delay_ms: u64,
    /// The PC running the companion app
    #[serde(default)]
    pub companion: CompanionConfig,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Address shown on the settings screen. Never contacted.
    #[serde(default = "default_companion_address")]
    pub address: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            address: default_companion_address(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_launch_delay_ms() -> u64 {
    DEFAULT_LAUNCH_DELAY.as_millis() as u64
}

fn default_companion_address() -> String {
    "192.168.1.100".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            launch_delay_ms: default_launch_delay_ms(),
            companion: CompanionConfig::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults first if it does not exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }
}
