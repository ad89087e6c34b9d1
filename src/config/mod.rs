// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! The file carries a single `[general]` section holding the display
//! language and the theme mode. The whole file is rewritten on every save,
//! so both preference fields always land on disk together.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI flag / `FOLIO_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory (see [`crate::app::paths`])
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! let mut config = config::load_from_dir(None);
//! config.general.language = Some("ja".to_string());
//! config::save_to_dir(&config, None).expect("Failed to save config");
//! ```

pub mod store;

pub use store::{Preference, PreferenceStore};

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Display language code (e.g., "en", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (dark or light).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

fn resolve_dir(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.to_path_buf()),
        None => paths::get_app_config_dir(),
    }
}

/// Loads the configuration, preferring `dir_override` when given. A missing
/// or unreadable file yields the default configuration.
#[must_use]
pub fn load_from_dir(dir_override: Option<&Path>) -> Config {
    let Some(dir) = resolve_dir(dir_override) else {
        return Config::default();
    };

    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }

    load_from_path(&path).unwrap_or_default()
}

/// Saves the configuration, preferring `dir_override` when given. A machine
/// with no resolvable config directory silently skips persistence.
pub fn save_to_dir(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    let Some(dir) = resolve_dir(dir_override) else {
        return Ok(());
    };

    save_to_path(config, &dir.join(CONFIG_FILE))
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_both_fields() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ja".to_string()),
                theme_mode: Some(ThemeMode::Light),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_from_dir_defaults_when_file_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_from_dir(Some(temp_dir.path()));
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let config = Config {
            general: GeneralConfig {
                language: None,
                theme_mode: Some(ThemeMode::Dark),
            },
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("theme_mode = \"dark\""));
    }
}
