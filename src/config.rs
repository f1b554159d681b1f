use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Gateway configuration, reduced to the parts this crate reads.
///
/// camelCase aliases are accepted so files written for the wider gateway
/// (`userTimezone`, `timeFormat`) deserialize unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agents: AgentsConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub defaults: AgentDefaults,
}

#[derive(Debug, Default, Deserialize)]
pub struct AgentDefaults {
    #[serde(default, alias = "userTimezone")]
    pub user_timezone: Option<String>,
    #[serde(default, alias = "timeFormat")]
    pub time_format: Option<String>,
}

impl Config {
    /// Load configuration from the first candidate path that exists and
    /// parses; fall back to defaults when none does.
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }
            if let Ok(config) = Self::from_path(&path) {
                return config;
            }
        }
        Self::default()
    }

    /// Read and parse a specific config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/msgstamp/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("msgstamp").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("msgstamp").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory dotfile: ~/.msgstamp.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".msgstamp.toml"));
        }

        paths
    }
}
