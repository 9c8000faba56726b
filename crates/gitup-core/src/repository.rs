//! Repository record.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::Mutex;

use crate::update::{UpdateError, UpdateService};

/// Deployable working copy.
///
/// Not `Clone`: the update lock must stay unique per repository, so records
/// are owned by the registry and shared through an `Arc`.
pub struct Repository {
    name: String,
    path: PathBuf,
    secret: String,
    allow_unsigned: bool,
    git_path: PathBuf,
    update_lock: Arc<Mutex<()>>,
}

impl Repository {
    /// Create a new repository record.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        secret: impl Into<String>,
        git_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            secret: secret.into(),
            allow_unsigned: false,
            git_path: git_path.into(),
            update_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Accept deliveries without signature when no secret is configured.
    pub fn with_allow_unsigned(mut self, allow_unsigned: bool) -> Self {
        self.allow_unsigned = allow_unsigned;
        self
    }

    /// Repository full name, e.g. `owner/repo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Working copy path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Webhook shared secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Git executable path.
    pub fn git_path(&self) -> &Path {
        &self.git_path
    }

    /// Whether unsigned deliveries are accepted when no secret is set.
    pub fn allows_unsigned(&self) -> bool {
        self.allow_unsigned
    }

    /// Refresh the working copy, one update at a time.
    ///
    /// Concurrent callers wait for the running update to finish. Once the
    /// lock is taken, the update runs in its own task and keeps the lock until
    /// the command exits, even if the caller stops waiting.
    #[tracing::instrument(skip_all, fields(repository = %self.name))]
    pub async fn update(
        self: &Arc<Self>,
        service: Arc<dyn UpdateService>,
    ) -> Result<(), UpdateError> {
        let guard = self.update_lock.clone().lock_owned().await;
        let repository = self.clone();

        tokio::spawn(async move {
            let result = service.pull(&repository).await;
            drop(guard);
            result
        })
        .await
        .map_err(|e| UpdateError::TaskFailed { source: e })?
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("secret", &if self.secret.is_empty() { "" } else { "***" })
            .field("allow_unsigned", &self.allow_unsigned)
            .field("git_path", &self.git_path)
            .finish()
    }
}
