//! Working copy update.

use std::{
    io::Read,
    process::{ExitStatus, Stdio},
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::Repository;

/// Git arguments used to refresh a working copy.
pub const GIT_PULL_ARGS: &[&str] = &["pull", "--force"];

/// Update error.
///
/// Messages keep the `<cause>: <output>` shape, output being the combined
/// stdout and stderr of the command.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("{source}: ")]
    SpawnFailed { source: std::io::Error },
    #[error("{source}: ")]
    OutputFailed { source: std::io::Error },
    #[error("{source}: ")]
    TaskFailed { source: tokio::task::JoinError },
    #[error("{status}: {output}")]
    CommandFailed { status: ExitStatus, output: String },
}

/// Runs the update command for a repository.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait UpdateService: Send + Sync {
    /// Pull the latest changes into the working copy.
    ///
    /// Callers go through [`Repository::update`], which serializes calls and
    /// keeps the lock while the command runs.
    async fn pull(&self, repository: &Repository) -> Result<(), UpdateError>;
}

/// Update service using the git executable.
pub struct GitUpdateService;

impl GitUpdateService {
    /// Creates a new service.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UpdateService for GitUpdateService {
    async fn pull(&self, repository: &Repository) -> Result<(), UpdateError> {
        debug!(
            git_path = %repository.git_path().display(),
            path = %repository.path().display(),
            message = "Running git pull",
        );

        // stdout and stderr share one pipe so the output keeps its write order.
        let (mut reader, writer) =
            std::io::pipe().map_err(|e| UpdateError::SpawnFailed { source: e })?;
        let stderr_writer = writer
            .try_clone()
            .map_err(|e| UpdateError::SpawnFailed { source: e })?;

        let mut command = Command::new(repository.git_path());
        command
            .args(GIT_PULL_ARGS)
            .current_dir(repository.path())
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer)
            .kill_on_drop(false);

        let mut child = command
            .spawn()
            .map_err(|e| UpdateError::SpawnFailed { source: e })?;
        // The command keeps its copies of the write ends until dropped.
        drop(command);

        let output = tokio::task::spawn_blocking(move || {
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer).map(|_| buffer)
        });

        let status = child
            .wait()
            .await
            .map_err(|e| UpdateError::OutputFailed { source: e })?;
        let output = output
            .await
            .map_err(|e| UpdateError::TaskFailed { source: e })?
            .map_err(|e| UpdateError::OutputFailed { source: e })?;
        let combined = String::from_utf8_lossy(&output).into_owned();

        if status.success() {
            debug!(output = %combined, message = "git pull succeeded");
            Ok(())
        } else {
            Err(UpdateError::CommandFailed {
                status,
                output: combined,
            })
        }
    }
}
