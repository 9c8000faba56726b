//! Config errors.

use std::path::PathBuf;

use thiserror::Error;

/// Config error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration file '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration file: {source}")]
    ParseFailed { source: toml::de::Error },
    #[error("Could not resolve git executable '{command}': {source}")]
    GitNotFound {
        command: String,
        source: which::Error,
    },
    #[error("Could not resolve repository path '{}': {source}", path.display())]
    InvalidRepositoryPath {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result alias for `ConfigError`.
pub type Result<T, E = ConfigError> = ::core::result::Result<T, E>;
