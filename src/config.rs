use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::column::ExclusionPatterns;
use crate::error::{ConfigError, Result};

/// Longest accepted spring-loaded hover delay, in milliseconds
pub const MAX_HOVER_DELAY_MS: u64 = 60_000;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnsConfig,
    /// Vault path -> custom icon filename (relative to `columns.icon_dir`)
    pub icons: BTreeMap<String, String>,
    /// Vault path -> emoji glyph
    pub emoji: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Newline-separated, case-insensitive substrings hiding matching paths
    pub exclusion_patterns: String,
    /// Drag-hover time before a folder springs open, in milliseconds
    pub hover_delay_ms: u64,
    /// Vault-relative directory holding custom icon images
    pub icon_dir: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            exclusion_patterns: String::new(),
            hover_delay_ms: 1000,
            icon_dir: ".miller-columns/icons".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, the default location, or
    /// fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/miller-columns/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("miller-columns").join("config.toml"))
    }

    fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.columns.hover_delay_ms == 0 || self.columns.hover_delay_ms > MAX_HOVER_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "hover_delay_ms must be 1-{}, got {}",
                MAX_HOVER_DELAY_MS, self.columns.hover_delay_ms
            )));
        }

        if self.columns.icon_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("icon_dir must not be empty".into()));
        }

        for (section, map) in [("icons", &self.icons), ("emoji", &self.emoji)] {
            if let Some((key, _)) = map.iter().find(|(k, v)| k.is_empty() || v.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "[{}] entry '{}' has an empty path or value",
                    section, key
                )));
            }
        }

        Ok(())
    }

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.columns.hover_delay_ms)
    }

    pub fn exclusion_patterns(&self) -> ExclusionPatterns {
        ExclusionPatterns::parse(&self.columns.exclusion_patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hover_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[columns]"));
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        let mut config = Config::default();
        config.columns.hover_delay_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_emoji_value_is_rejected() {
        let mut config = Config::default();
        config.emoji.insert("notes".into(), String::new());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[emoji]"));
    }

    #[test]
    fn test_exclusion_patterns_come_from_raw_setting() {
        let mut config = Config::default();
        config.columns.exclusion_patterns = "Archive\n\n  .trash ".into();
        let patterns = config.exclusion_patterns();
        assert!(patterns.is_excluded("notes/ARCHIVE/old.md"));
        assert!(patterns.is_excluded(".trash/x.md"));
        assert!(!patterns.is_excluded("notes/today.md"));
    }
}
