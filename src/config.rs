//! User configuration loaded from TOML.
//!
//! The default location is `$XDG_CONFIG_HOME/keycalc/config.toml`. A missing
//! default file is not an error; every setting has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// How calculator state is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Character inserted between groups of three integer digits.
    pub group_separator: char,
    /// Show the committed part of the expression above the entry.
    pub show_preview: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: ',',
            show_preview: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Config {
    /// Default configuration file path, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. The default path may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            info!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            _ => {
                info!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.display.group_separator;
        if sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+') {
            return Err(ConfigError::Validation(format!(
                "group_separator {sep:?} collides with number syntax"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.group_separator, ',');
        assert!(config.display.show_preview);
    }

    #[test]
    fn test_partial_display_section() {
        let config = Config::from_toml("[display]\nshow_preview = false\n").unwrap();
        assert!(!config.display.show_preview);
        assert_eq!(config.display.group_separator, ',');
    }

    #[test]
    fn test_custom_separator() {
        let config = Config::from_toml("[display]\ngroup_separator = \" \"\n").unwrap();
        assert_eq!(config.display.group_separator, ' ');
    }

    #[test]
    fn test_rejects_numeric_separator() {
        let err = Config::from_toml("[display]\ngroup_separator = \".\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Config::from_toml("[display]\ngroup_separator = \"7\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        for sep in ["-", "+"] {
            let text = format!("[display]\ngroup_separator = \"{sep}\"\n");
            let err = Config::from_toml(&text).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{sep}");
        }
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml("[display\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            display: DisplayConfig {
                group_separator: '\'',
                show_preview: false,
            },
        };
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/keycalc.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
