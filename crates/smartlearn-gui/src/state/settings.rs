//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. Only
//! presentation preferences persist; no learning data is ever written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,
}

/// Display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light, dark, or follow the system.
    pub theme_mode: ThemeMode,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path. Missing or corrupt files fall
    /// back to defaults.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize settings: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Default settings file location.
    fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "SmartLearn")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("smartlearn-settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Dark;

        let mut path = std::env::temp_dir();
        path.push(format!(
            "smartlearn_settings_{}.toml",
            std::process::id()
        ));
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.display.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = Settings::load_from(&PathBuf::from("/nonexistent/settings.toml"));
        assert_eq!(loaded.display.theme_mode, ThemeMode::default());
    }
}
