//! CLI configuration management.
//!
//! Handles loading of `pseu.toml` with environment variable override support.
//! A missing file is not an error; every field has a default.
//!
//! ```toml
//! log_level = "info"
//! separator = ","
//! default_dice = "3d6"
//! default_range = "1-100"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use pseu_core::notation::{parse_dice, parse_range};

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PseuConfig {
    /// Log level used when neither `RUST_LOG` nor `--verbose` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Word separator for pick/shuffle when `--sep` is not given
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Dice rolled by `pseu roll` with no arguments
    #[serde(default = "default_dice")]
    pub default_dice: String,

    /// Range drawn by `pseu rand` with no arguments
    #[serde(default = "default_range")]
    pub default_range: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

fn default_dice() -> String {
    "1d6".to_string()
}

fn default_range() -> String {
    "0-65535".to_string()
}

impl Default for PseuConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            separator: default_separator(),
            default_dice: default_dice(),
            default_range: default_range(),
        }
    }
}

impl PseuConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path`, falling back to defaults only when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("PSEU_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(separator) = lookup("PSEU_SEP") {
            self.separator = separator;
        }

        if let Some(dice) = lookup("PSEU_DEFAULT_DICE") {
            self.default_dice = dice;
        }

        if let Some(range) = lookup("PSEU_DEFAULT_RANGE") {
            self.default_range = range;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.separator.is_empty() {
            errors.push("separator cannot be empty".to_string());
        }

        if let Err(e) = parse_dice(&self.default_dice) {
            errors.push(format!("default_dice: {}", e));
        }

        if let Err(e) = parse_range(&self.default_range) {
            errors.push(format!("default_range: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {message}")]
    Io {
        /// Path of the config file
        path: String,
        /// Underlying IO error message
        message: String,
    },
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = PseuConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.separator, " ");
        assert_eq!(config.default_dice, "1d6");
    }

    #[test]
    fn test_missing_file_gives_default() {
        let config = PseuConfig::load_or_default(Path::new("does/not/exist/pseu.toml")).unwrap();
        assert_eq!(config, PseuConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "separator = \",\"").unwrap();
        writeln!(file, "default_dice = \"3d6\"").unwrap();

        let config = PseuConfig::load(file.path()).unwrap();
        assert_eq!(config.separator, ",");
        assert_eq!(config.default_dice, "3d6");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_broken_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "separator = ").unwrap();

        assert!(matches!(
            PseuConfig::load_or_default(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(PseuConfig::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            [("PSEU_SEP", ";"), ("PSEU_DEFAULT_RANGE", "1-10")].into_iter().collect();
        let config = PseuConfig::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.separator, ";");
        assert_eq!(config.default_range, "1-10");
        assert_eq!(config.default_dice, "1d6");
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = PseuConfig {
            log_level: "loud".to_string(),
            separator: String::new(),
            default_dice: "0d6".to_string(),
            default_range: "9-1".to_string(),
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }
}
