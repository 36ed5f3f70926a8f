//! Persisted application settings.
//!
//! Settings live in a TOML file under the platform config directory. A
//! missing or unreadable file silently falls back to defaults; on first
//! launch the defaults are written out so the file is discoverable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// API base URL used when no settings file exists yet.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the question bank API (scheme + host + path prefix).
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// When the file does not exist yet, defaults are returned and written
    /// out best-effort so users have a file to edit.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
            return settings;
        }
        Self::load_from(&path)
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the settings file under the platform config directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "QuestionBankStudio", "QBS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(&PathBuf::from("/nonexistent/settings.toml"));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let settings: Settings =
            toml::from_str("api_base_url = \"https://bank.example.com\"\nlegacy_key = 3\n")
                .expect("parse settings");
        assert_eq!(settings.api_base_url, "https://bank.example.com");
    }
}
