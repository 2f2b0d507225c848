//! Server connection settings.
//!
//! Loaded once at startup: the `BCS_SERVER_URL` environment variable wins,
//! then `settings.toml` in the platform config directory, then the default.
//! Search state itself is never persisted.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default server to talk to when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Environment variable overriding the configured server URL.
const SERVER_URL_ENV: &str = "BCS_SERVER_URL";

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Connection settings for the catalogue server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the server hosting the REST and search endpoints.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ServerSettings {
    /// Load settings from the environment and the config file.
    pub fn load() -> Self {
        let env_override = std::env::var(SERVER_URL_ENV).ok();
        let file_contents =
            settings_path().and_then(|path| fs::read_to_string(path).ok());
        Self::from_sources(env_override, file_contents.as_deref())
    }

    /// Resolve settings from raw sources. Split out for testability.
    fn from_sources(env_override: Option<String>, file_contents: Option<&str>) -> Self {
        if let Some(base_url) = env_override.filter(|value| !value.is_empty()) {
            return Self { base_url };
        }
        match file_contents {
            Some(contents) => toml::from_str(contents).unwrap_or_else(|err| {
                warn!(%err, "invalid settings file, falling back to defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

/// Path of the settings file, if a config directory can be determined.
fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "Biobank Catalogue Studio")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        let settings = ServerSettings::from_sources(None, None);
        assert_eq!(settings.base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn environment_wins_over_file() {
        let settings = ServerSettings::from_sources(
            Some("https://catalogue.example.org".to_string()),
            Some("base_url = \"https://file.example.org\""),
        );
        assert_eq!(settings.base_url, "https://catalogue.example.org");
    }

    #[test]
    fn file_contents_are_parsed() {
        let settings =
            ServerSettings::from_sources(None, Some("base_url = \"https://file.example.org\""));
        assert_eq!(settings.base_url, "https://file.example.org");
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let settings = ServerSettings::from_sources(None, Some("base_url = 17 :: nope"));
        assert_eq!(settings.base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let settings = ServerSettings::from_sources(Some(String::new()), None);
        assert_eq!(settings.base_url, DEFAULT_SERVER_URL);
    }
}
