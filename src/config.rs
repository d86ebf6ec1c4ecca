//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// User configuration for the form screen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Mask the password input (default: true)
    pub mask_password: Option<bool>,
    /// Input poll interval in milliseconds
    pub poll_interval_ms: Option<u64>,
    /// Heading drawn above the form
    pub heading: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup-form", "signup-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    /// How long the event loop waits for input before redrawing
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.mask_password.is_none());
        assert!(config.poll_interval_ms.is_none());
        assert!(config.heading.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            mask_password: Some(false),
            poll_interval_ms: Some(50),
            heading: Some("Sign Up".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.mask_password, Some(false));
        assert_eq!(parsed.poll_interval_ms, Some(50));
        assert_eq!(parsed.heading, Some("Sign Up".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.mask_password.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mask_password": true, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mask_password, Some(true));
    }

    #[test]
    fn test_poll_interval_default() {
        let config = FormConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_poll_interval_configured() {
        let config = FormConfig {
            poll_interval_ms: Some(16),
            ..Default::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = FormConfig::config_path();
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("signup-form-tui-{}", std::process::id()));
        let path = dir.join("config.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, r#"{"heading": "Register"}"#).unwrap();

        let loaded = FormConfig::load_from(&path).unwrap();
        assert_eq!(loaded.heading, Some("Register".to_string()));
        assert!(loaded.mask_password.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("signup-form-tui-missing/config.json");
        let loaded = FormConfig::load_from(&path).unwrap();
        assert!(loaded.heading.is_none());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "signup-form-tui-malformed-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        assert!(FormConfig::load_from(&path).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_default_never_fails() {
        let _config = FormConfig::load_or_default();
    }
}
