//! Filesystem resolution helpers.

use std::path::{Component, Path, PathBuf};

use crate::{ConfigError, Result};

/// Git command used when none is configured.
pub const DEFAULT_GIT_COMMAND: &str = "git";

/// Resolve the git executable, searching `PATH` for bare command names.
pub fn resolve_git_path(command: Option<&str>) -> Result<PathBuf> {
    let command = match command {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_GIT_COMMAND,
    };

    which::which(command).map_err(|e| ConfigError::GitNotFound {
        command: command.to_string(),
        source: e,
    })
}

/// Resolve a repository working copy path.
///
/// Relative paths are taken from `config_dir`, then made absolute against the
/// current directory.
pub fn resolve_repository_path(config_dir: &Path, path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let joined = config_dir.join(path);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()
            .map_err(|e| ConfigError::InvalidRepositoryPath {
                path: joined.clone(),
                source: e,
            })?
            .join(joined)
    };

    Ok(clean_path(&absolute))
}

/// Lexically remove `.` and `..` components.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            c => cleaned.push(c),
        }
    }

    cleaned
}
