//! Configuration management for feedline.
//!
//! Loads configuration from ${FEEDLINE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for feedline configuration and data directories.
    //!
    //! FEEDLINE_HOME resolution order:
    //! 1. FEEDLINE_HOME environment variable (if set)
    //! 2. ~/.config/feedline (default)

    use std::path::PathBuf;

    /// Returns the feedline home directory.
    ///
    /// Checks FEEDLINE_HOME env var first, falls back to ~/.config/feedline
    pub fn feedline_home() -> PathBuf {
        if let Ok(home) = std::env::var("FEEDLINE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("feedline"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        feedline_home().join("config.toml")
    }

    /// Returns the path to the persisted session token file.
    pub fn session_path() -> PathBuf {
        feedline_home().join("session.json")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        feedline_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the upstream feed source.
    pub api_base_url: String,

    /// Number of items the fetched source is expanded to.
    pub target_count: usize,

    /// HTTP request timeout in seconds (0 disables).
    pub request_timeout_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            target_count: Self::DEFAULT_TARGET_COUNT,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
    const DEFAULT_TARGET_COUNT: usize = 2000;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.target_count, 2000);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.target_count, 2000);
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "target_count = 50\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.target_count, 50);
        assert_eq!(config.api_base_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let from_template: Config = toml::from_str(default_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(from_template.api_base_url, defaults.api_base_url);
        assert_eq!(from_template.target_count, defaults.target_count);
        assert_eq!(
            from_template.request_timeout_secs,
            defaults.request_timeout_secs
        );
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# existing").unwrap();

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.request_timeout().is_none());
    }
}
