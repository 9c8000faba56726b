//! Config module.

mod errors;
mod paths;
mod repositories;

use std::env;

pub use errors::{ConfigError, Result};
pub use paths::{resolve_git_path, resolve_repository_path, DEFAULT_GIT_COMMAND};
pub use repositories::{RepositoriesConfig, RepositoryConfig, DEFAULT_CONFIG_PATH};

/// GitHub caps webhook payloads at 25 MB.
const DEFAULT_MAX_PAYLOAD_SIZE: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Maximum accepted webhook body size, in bytes.
    pub max_payload_size: usize,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            logging: LoggingConfig {
                use_bunyan: env_to_bool("GITUP_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("GITUP_SERVER_BIND_IP", "0.0.0.0"),
                bind_port: env_to_u16("GITUP_SERVER_BIND_PORT", 8080),
                workers_count: env_to_optional_u16("GITUP_SERVER_WORKERS_COUNT", None),
                max_payload_size: env_to_usize(
                    "GITUP_SERVER_MAX_PAYLOAD_SIZE",
                    DEFAULT_MAX_PAYLOAD_SIZE,
                ),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
