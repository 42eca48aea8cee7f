//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the presence config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid JSON, or a value of the wrong shape.
    #[error("Invalid config{}: {source}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed but unusable value.
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in '{}'", p.display()))
        .unwrap_or_default()
}
