//! Repository registry.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use gitup_config::{resolve_git_path, resolve_repository_path, RepositoriesConfig};

use crate::{Repository, Result};

/// Repositories by routing name, fixed at startup.
#[derive(Debug, Default)]
pub struct RepositoryRegistry {
    repositories: BTreeMap<String, Arc<Repository>>,
}

impl RepositoryRegistry {
    /// Build the registry from a loaded configuration file.
    ///
    /// Resolves the git executable from `PATH` when needed.
    pub fn from_config(config: &RepositoriesConfig, config_path: &Path) -> Result<Self> {
        let git_path = resolve_git_path(config.bin.as_deref())?;
        let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

        Self::build(config, config_dir, &git_path)
    }

    /// Build the registry with an already resolved git executable.
    pub fn build(config: &RepositoriesConfig, config_dir: &Path, git_path: &Path) -> Result<Self> {
        let mut repositories = BTreeMap::new();

        for (routing_name, repo) in &config.repositories {
            let path: PathBuf = resolve_repository_path(config_dir, &repo.path)?;
            let name = repo.name.clone().unwrap_or_else(|| routing_name.clone());

            repositories.insert(
                routing_name.clone(),
                Arc::new(
                    Repository::new(name, path, repo.secret.clone(), git_path)
                        .with_allow_unsigned(repo.allow_unsigned),
                ),
            );
        }

        Ok(Self { repositories })
    }

    /// Find a repository by routing name.
    pub fn find(&self, name: &str) -> Option<&Arc<Repository>> {
        self.repositories.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Repository)> {
        self.repositories.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

impl FromIterator<(String, Repository)> for RepositoryRegistry {
    fn from_iter<T: IntoIterator<Item = (String, Repository)>>(iter: T) -> Self {
        Self {
            repositories: iter.into_iter().map(|(k, v)| (k, Arc::new(v))).collect(),
        }
    }
}
