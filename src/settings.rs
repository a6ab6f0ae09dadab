//! Settings loading and validation
//!
//! The API credentials and output file prefix live in a JSON settings file.
//! The path is resolved from multiple sources with fallback:
//! 1. CLI argument (`--settings`)
//! 2. `FOREMAN_SETTINGS_PATH` environment variable
//! 3. Default file (`~/.foreman/settings.json`)

use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings;
use crate::error::{ForemanError, Result};

/// Validated settings required for API requests and file generation
#[derive(Deserialize, Clone)]
pub struct Settings {
    /// Foreman environments endpoint, including its trailing slash
    /// (e.g. `https://foreman.example.com/api/environments/`). Per-environment
    /// request URLs are built by direct concatenation onto this value.
    #[serde(default)]
    pub base_url: String,
    /// API username
    #[serde(default)]
    pub username: String,
    /// Password for the API user - treated as opaque, never logged
    #[serde(default)]
    pub password: String,
    /// Inventory file name prefix, combined with the environment ID to form
    /// the output file name in the user's home directory
    #[serde(default)]
    pub hfile: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("hfile", &self.hfile)
            .finish()
    }
}

impl Settings {
    /// Load settings with path fallback: CLI argument, then the
    /// `FOREMAN_SETTINGS_PATH` environment variable, then the default file.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(cli_path)?;
        println!("Reading Foreman configuration from: {}", path.display());
        Self::load_from_path(&path)
    }

    /// Resolve the settings file path from the available sources
    fn resolve_path(cli_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_path {
            debug!("Using settings path from CLI argument");
            return Ok(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(settings::PATH_ENV_VAR) {
            debug!(
                "Using settings path from {} environment variable",
                settings::PATH_ENV_VAR
            );
            return Ok(PathBuf::from(path));
        }

        dirs::home_dir()
            .map(|home| home.join(settings::FILE_PATH))
            .ok_or_else(|| {
                ForemanError::Settings("Could not determine the home directory".to_string())
            })
    }

    /// Read and validate a settings file at an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ForemanError::Settings(format!(
                "Could not read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let parsed: Settings = serde_json::from_str(&content).map_err(|e| {
            ForemanError::Settings(format!(
                "Could not parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        parsed.validate(path)
    }

    /// Fail fast when any required key is missing or empty
    fn validate(self, path: &Path) -> Result<Self> {
        let values = [
            &self.base_url,
            &self.username,
            &self.password,
            &self.hfile,
        ];

        let missing: Vec<&str> = settings::REQUIRED_KEYS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| *key)
            .collect();

        if missing.is_empty() {
            Ok(self)
        } else {
            Err(ForemanError::Settings(format!(
                "Missing required keys in settings file {}: {}",
                path.display(),
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_settings() {
        let file = settings_file(
            r#"{
                "base_url": "https://foreman.example.com/api/environments/",
                "username": "admin",
                "password": "secret",
                "hfile": "ansible_hosts_"
            }"#,
        );

        let settings = Settings::load_from_path(file.path()).unwrap();
        assert_eq!(
            settings.base_url,
            "https://foreman.example.com/api/environments/"
        );
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "secret");
        assert_eq!(settings.hfile, "ansible_hosts_");
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load_from_path(Path::new("/nonexistent/settings.json"));
        match result {
            Err(ForemanError::Settings(msg)) => {
                assert!(msg.contains("/nonexistent/settings.json"));
            }
            _ => panic!("Expected ForemanError::Settings"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let file = settings_file("not json at all");
        let result = Settings::load_from_path(file.path());
        match result {
            Err(ForemanError::Settings(msg)) => assert!(msg.contains("Could not parse")),
            _ => panic!("Expected ForemanError::Settings"),
        }
    }

    #[test]
    fn test_missing_keys_are_all_listed() {
        let file = settings_file(r#"{"base_url": "https://foreman.example.com/"}"#);
        let result = Settings::load_from_path(file.path());
        match result {
            Err(ForemanError::Settings(msg)) => {
                assert!(msg.contains("username"));
                assert!(msg.contains("password"));
                assert!(msg.contains("hfile"));
                assert!(!msg.contains("base_url,"));
            }
            _ => panic!("Expected ForemanError::Settings"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let file = settings_file(
            r#"{
                "base_url": "https://foreman.example.com/",
                "username": "",
                "password": "secret",
                "hfile": "hosts_"
            }"#,
        );
        let result = Settings::load_from_path(file.path());
        match result {
            Err(ForemanError::Settings(msg)) => {
                assert!(msg.contains("username"));
                assert!(!msg.contains("password"));
            }
            _ => panic!("Expected ForemanError::Settings"),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = Settings {
            base_url: "https://foreman.example.com/".to_string(),
            username: "admin".to_string(),
            password: "hunter2".to_string(),
            hfile: "hosts_".to_string(),
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
