//! Repository configuration file.

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::{ConfigError, Result};

/// Default location of the repository configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// Repository configuration file.
///
/// Top-level keys are global settings, every table is a repository keyed by
/// its routing name:
///
/// ```toml
/// bin = "git"
///
/// ["example.com"]
/// name = "owner/repo"
/// path = "./repo"
/// secret = "my-secret"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoriesConfig {
    /// Git command or path, looked up in `PATH` when not absolute.
    #[serde(default)]
    pub bin: Option<String>,
    /// Repositories, by routing name.
    #[serde(flatten)]
    pub repositories: BTreeMap<String, RepositoryConfig>,
}

/// Single repository section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Repository full name on the forge, e.g. `owner/repo`.
    #[serde(default)]
    pub name: Option<String>,
    /// Working copy path, relative to the configuration file.
    pub path: String,
    /// Webhook shared secret.
    #[serde(default)]
    pub secret: String,
    /// Accept unsigned deliveries when no secret is set.
    #[serde(default)]
    pub allow_unsigned: bool,
}

impl RepositoriesConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed { source: e })
    }
}
