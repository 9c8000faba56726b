//! Validation utilities.

use std::{fmt::Write, net::IpAddr};

use gitup_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid value for {}: '{}'", name, value);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "GITUP_SERVER_BIND_IP");
    } else if config.server.bind_ip.parse::<IpAddr>().is_err() {
        _invalid(&mut error, "GITUP_SERVER_BIND_IP", &config.server.bind_ip);
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "GITUP_SERVER_BIND_PORT");
    }
    if config.server.workers_count == Some(0) {
        _invalid(&mut error, "GITUP_SERVER_WORKERS_COUNT", "0");
    }
    if config.server.max_payload_size == 0 {
        _invalid(&mut error, "GITUP_SERVER_MAX_PAYLOAD_SIZE", "0");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 8080;
        config.server.workers_count = None;
        config.server.max_payload_size = 1024;
        config
    }

    #[test]
    fn test_valid_configuration() {
        assert!(validate_configuration(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_configuration() {
        macro_rules! test {
            ($field: ident, $value: expr, $name: literal) => {{
                let mut config = valid_config();
                config.server.$field = $value;
                match validate_configuration(&config) {
                    Err(ValidationError::EnvVarsError { errors }) => {
                        assert!(errors.contains($name), "{}", errors)
                    }
                    Ok(()) => panic!("{} should be rejected", $name),
                }
            }};
        }

        test!(bind_ip, String::new(), "GITUP_SERVER_BIND_IP");
        test!(bind_ip, "localhost:80".into(), "GITUP_SERVER_BIND_IP");
        test!(bind_port, 0, "GITUP_SERVER_BIND_PORT");
        test!(workers_count, Some(0), "GITUP_SERVER_WORKERS_COUNT");
        test!(max_payload_size, 0, "GITUP_SERVER_MAX_PAYLOAD_SIZE");
    }

    #[test]
    fn test_errors_are_accumulated() {
        let mut config = valid_config();
        config.server.bind_ip = String::new();
        config.server.bind_port = 0;

        let ValidationError::EnvVarsError { errors } =
            validate_configuration(&config).unwrap_err();
        assert_eq!(errors.lines().filter(|l| !l.is_empty()).count(), 2);
    }
}
