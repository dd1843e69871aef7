//! Helpers shared by the CLI commands.

use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration resolved for a CLI run.
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl CliContext {
    /// Load the config from `override_path`, or from the default location.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let config_path = override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(crate::utils::get_config_path);
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        Ok(Self {
            config,
            config_path,
        })
    }
}

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an informational line with an arrow prefix.
pub fn print_info(msg: &str) {
    println!("\u{2192} {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_override_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let ctx = CliContext::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(ctx.config_path, path);
        assert_eq!(ctx.config, Config::default());
    }
}
