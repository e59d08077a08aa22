use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "ParcelWizard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend serving `/api/tariffs/get-tariffs/`
    pub tariff_api_base_url: String,

    /// Timeout for tariff requests in seconds
    pub request_timeout_secs: u64,

    /// Override for the log directory
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tariff_api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 10,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, writing defaults if missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!("Created default config at: {}", path.display());
            return Ok(config);
        }

        let load_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| load_failed(Box::new(e)))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| load_failed(Box::new(e)))?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(Box::new(e)))?;
        fs::write(path, json).map_err(|e| save_failed(Box::new(e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.tariff_api_base_url.starts_with("http://") && !self.tariff_api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "tariff_api_base_url must be an http(s) URL, got {:?}",
                self.tariff_api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Platform config directory for the app
    pub fn app_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::app_dir()?.join("config.json"))
    }

    /// Where log files go: the override, else `<app dir>/logs`, else `./logs`
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            Self::app_dir()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|_| PathBuf::from("logs"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tariff_api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            tariff_api_base_url: "https://api.example.com".to_string(),
            request_timeout_secs: 3,
            log_dir: Some(dir.path().join("logs")),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"request_timeout_secs": 30}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.tariff_api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_invalid_files_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::LoadFailed { .. })));

        fs::write(&path, r#"{"tariff_api_base_url": "ftp://x"}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_log_dir_override() {
        let config = Config {
            log_dir: Some(PathBuf::from("/tmp/wizard-logs")),
            ..Default::default()
        };
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/tmp/wizard-logs"));
    }
}
