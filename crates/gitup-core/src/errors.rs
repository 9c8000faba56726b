//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`gitup_config::ConfigError`].
    #[error("Configuration error: {source}")]
    ConfigError { source: gitup_config::ConfigError },
}

impl From<gitup_config::ConfigError> for DomainError {
    fn from(e: gitup_config::ConfigError) -> Self {
        Self::ConfigError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
