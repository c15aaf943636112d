use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use user_directory::RestConfig;

/// Application settings, read from `ootd.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    /// env_logger filter, e.g. `info` or `ootd=debug`
    pub log_level: String,
    /// Assumed number of closet items for the "closet worn" progress
    pub closet_size_estimate: u32,
    pub recent_limit: usize,
    pub top_styles_limit: usize,
    pub backend: Option<BackendConfig>,
}

/// Remote user directory; when absent the local SQLite directory is used
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: crate::filesystem::get_database_path(),
            log_level: "info".to_string(),
            closet_size_estimate: 30,
            recent_limit: 5,
            top_styles_limit: 3,
            backend: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn rest_config(&self) -> Option<RestConfig> {
        self.backend.as_ref().map(|b| RestConfig {
            base_url: b.url.clone(),
            api_key: b.api_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("closet_size_estimate = 50\n").unwrap();
        assert_eq!(config.closet_size_estimate, 50);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.top_styles_limit, 3);
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_backend_section() {
        let config = AppConfig::from_toml(
            r#"
log_level = "debug"

[backend]
url = "https://project.supabase.co"
api_key = "anon"
"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        let rest = config.rest_config().unwrap();
        assert_eq!(rest.base_url, "https://project.supabase.co");
        assert_eq!(rest.api_key, "anon");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = AppConfig::from_toml("closet_size_estimate = \"many\"");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/ootd.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let parsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
