//! Builder for creating and configuring Manager instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Manager;
use crate::{
    db::Database,
    error::{Result, StudioError},
    gateway::RetryPolicy,
};

/// Builder for creating and configuring Manager instances.
#[derive(Debug, Clone, Default)]
pub struct ManagerBuilder {
    database_path: Option<PathBuf>,
    retry_policy: RetryPolicy,
}

impl ManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studio/studio.db` or `~/.local/share/studio/studio.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how gateways built on the manager retry transient failures.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Builds the configured manager, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::Configuration` for an unusable retry policy
    /// Returns `StudioError::FileSystem` if the database path is invalid
    /// Returns `StudioError::Database` if database initialization fails
    pub async fn build(self) -> Result<Manager> {
        self.retry_policy.validate()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StudioError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening studio database at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), StudioError>(())
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Manager::new(db_path, self.retry_policy))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studio")
            .place_data_file("studio.db")
            .map_err(|e| StudioError::XdgDirectory(e.to_string()))
    }
}
