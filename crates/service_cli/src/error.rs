//! Error types for the stress test CLI.

use std::path::PathBuf;

use adapter_xml::{LoadError, XmlError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Stress test document rejected
    #[error("Invalid stress test file {}: {source}", path.display())]
    Load {
        /// Offending file
        path: PathBuf,
        /// Loader error
        source: LoadError,
    },

    /// One or more files failed validation
    #[error("{failed} of {total} file(s) failed validation")]
    ValidationFailed {
        /// Number of failing files
        failed: usize,
        /// Number of files checked
        total: usize,
    },

    /// Writing XML failed
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
