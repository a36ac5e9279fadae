//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The only setting the upload workflow itself depends on is `endpoint_url`;
//! the pipeline endpoint is deliberately configuration, not a constant.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Fishfoto";

/// Where requests go when neither the CLI nor the config file says otherwise.
/// The pipeline service is a FastAPI app listening on its default port.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000/process";

/// Upper bound on a single pipeline request. Without it, a hung request
/// would leave the submit control disabled until the window is closed.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            endpoint_url: None,
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// The endpoint to submit to, falling back to the built-in default.
    pub fn endpoint_url(&self) -> &str {
        self.endpoint_url.as_deref().unwrap_or(DEFAULT_ENDPOINT_URL)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
    fn save_and_load_round_trip_preserves_endpoint() {
        let config = Config {
            language: Some("et".to_string()),
            endpoint_url: Some("https://fishfoto.example/process".to_string()),
            request_timeout_secs: Some(15),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.endpoint_url, config.endpoint_url);
        assert_eq!(loaded.request_timeout_secs, config.request_timeout_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.endpoint_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn unset_endpoint_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.endpoint_url(), DEFAULT_ENDPOINT_URL);
        assert_eq!(config.request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn explicit_endpoint_wins_over_default() {
        let config = Config {
            endpoint_url: Some("http://10.0.0.7:9000/run".to_string()),
            ..Config::default()
        };
        assert_eq!(config.endpoint_url(), "http://10.0.0.7:9000/run");
    }
}
