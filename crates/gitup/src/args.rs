use std::path::PathBuf;

use clap::Parser;
use gitup_config::{Config, RepositoriesConfig, DEFAULT_CONFIG_PATH};
use gitup_core::RepositoryRegistry;
use gitup_server::server::{run_server, AppContext};
use tracing::{info, warn};

use crate::Result;

/// Pull local working copies when GitHub push webhooks arrive.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Args {
    /// Repository configuration file.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,

    /// Port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// IP address to bind.
    #[arg(long)]
    pub bind_ip: Option<String>,
}

impl Args {
    /// Command line values take precedence over the environment.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.bind_port = port;
        }

        if let Some(bind_ip) = &self.bind_ip {
            config.server.bind_ip = bind_ip.clone();
        }
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn load_registry(args: &Args) -> Result<RepositoryRegistry> {
        let repositories = RepositoriesConfig::from_file(&args.config_path)?;
        let registry = RepositoryRegistry::from_config(&repositories, &args.config_path)?;

        for (routing_name, repository) in registry.iter() {
            info!(
                routing_name = routing_name,
                repository = repository.name(),
                path = %repository.path().display(),
                message = "Watching repository",
            );

            if repository.secret().is_empty() {
                if repository.allows_unsigned() {
                    warn!(
                        routing_name = routing_name,
                        message = "Signature verification is disabled. This can be a security concern.",
                    );
                } else {
                    warn!(
                        routing_name = routing_name,
                        message = "No secret configured, every push will be rejected.",
                    );
                }
            }
        }

        if registry.is_empty() {
            warn!(
                config_path = %args.config_path.display(),
                message = "No repository configured",
            );
        }

        Ok(registry)
    }

    pub fn run(config: Config, registry: RepositoryRegistry) -> Result<()> {
        let context = AppContext::new(config, registry);
        actix_rt::System::new().block_on(run_server(context))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut tmp_args = vec!["gitup"];
        tmp_args.extend(args);
        Args::try_parse_from(tmp_args).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let tests: Vec<(Vec<&str>, &str, Option<u16>)> = vec![
            (vec![], "./config.toml", None),
            (vec!["path/to/config.toml"], "path/to/config.toml", None),
            (vec!["-p", "80"], "./config.toml", Some(80)),
            (vec!["--port", "80"], "./config.toml", Some(80)),
            (vec!["path/to/config.toml", "-p", "80"], "path/to/config.toml", Some(80)),
            (
                vec!["path/to/config.toml", "--port", "80"],
                "path/to/config.toml",
                Some(80),
            ),
        ];

        for (args, config_path, port) in tests {
            let parsed = parse(&args);
            assert_eq!(parsed.config_path, PathBuf::from(config_path), "{args:?}");
            assert_eq!(parsed.port, port, "{args:?}");
        }
    }

    #[test]
    fn test_invalid_port() {
        assert!(Args::try_parse_from(["gitup", "--port", "not-a-port"]).is_err());
        assert!(Args::try_parse_from(["gitup", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_apply_to_config() {
        let mut config = Config::from_env_no_version();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 8080;

        parse(&[]).apply_to_config(&mut config);
        assert_eq!(config.server.bind_port, 8080);
        assert_eq!(config.server.bind_ip, "0.0.0.0");

        parse(&["-p", "9000", "--bind-ip", "127.0.0.1"]).apply_to_config(&mut config);
        assert_eq!(config.server.bind_port, 9000);
        assert_eq!(config.server.bind_ip, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_config() {
        let args = parse(&["./does/not/exist.toml"]);
        assert!(CommandExecutor::load_registry(&args).is_err());
    }
}
