//! CLI configuration management.
//!
//! Handles loading of the CLI configuration from a TOML file with
//! environment variable override support.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted indentation width.
pub const MAX_INDENT: usize = 8;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Spaces per nesting level in written documents
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Directory for normalised documents when no output file is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_indent() -> usize {
    2
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            indent: default_indent(),
            output_dir: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("STRESS_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(indent) = std::env::var("STRESS_INDENT") {
            if let Ok(indent) = indent.parse() {
                self.indent = indent;
            }
        }

        if let Ok(output_dir) = std::env::var("STRESS_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(output_dir));
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.indent > MAX_INDENT {
            errors.push(format!(
                "indent {} exceeds maximum allowed ({})",
                self.indent, MAX_INDENT
            ));
        }

        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                errors.push("output_dir cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment overrides and validate
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
    #[error("IO error: {0}")]
    Io(String),
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
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.indent, 2);
        assert_eq!(config.output_dir, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("STRESS_INDENT", "4");
        std::env::set_var("STRESS_OUTPUT_DIR", "normalised");
        let config = CliConfig::default().with_env_override();
        std::env::remove_var("STRESS_INDENT");
        std::env::remove_var("STRESS_OUTPUT_DIR");

        assert_eq!(config.indent, 4);
        assert_eq!(config.output_dir, Some(PathBuf::from("normalised")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\nindent = 0").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.indent, 0);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = true").unwrap();

        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("stress.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            indent: 12,
            output_dir: Some(PathBuf::new()),
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("log_level"));
                assert!(errors[1].contains("indent"));
                assert!(errors[2].contains("output_dir"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "{level} should be valid");
        }
    }
}
