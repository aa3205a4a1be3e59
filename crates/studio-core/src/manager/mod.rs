//! High-level async API over the studio database.
//!
//! [`Manager`] is the entry point used by interfaces and by
//! [`SqliteGateway`](crate::gateway::SqliteGateway). Each call opens the
//! SQLite database on a blocking thread, runs one transaction, and returns
//! owned values, so the manager itself is cheap to clone and share.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller /  │    │     Manager     │    │    Database     │
//! │      CLI        │───▶│ (studio_ops,    │───▶│   (via db/)     │
//! │                 │    │  item_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studio_core::{
//!     models::{CollectionId, CollectionKind, ItemPayload},
//!     params::CreateStudio,
//!     ManagerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ManagerBuilder::new()
//!     .with_database_path(Some("/tmp/studio.db"))
//!     .build()
//!     .await?;
//!
//! manager
//!     .create_studio(&CreateStudio {
//!         slug: "lumen".to_string(),
//!         name: "Lumen Photography".to_string(),
//!     })
//!     .await?;
//!
//! let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);
//! manager
//!     .add_item(
//!         &stages,
//!         ItemPayload::PipelineStage {
//!             name: "Lead".to_string(),
//!             color: None,
//!         },
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StudioError},
    gateway::RetryPolicy,
};

pub mod builder;
pub mod item_ops;
pub mod studio_ops;

#[cfg(test)]
mod tests;

pub use builder::ManagerBuilder;

/// Async facade over the studio database.
#[derive(Debug, Clone)]
pub struct Manager {
    pub(crate) db_path: PathBuf,
    retry_policy: RetryPolicy,
}

impl Manager {
    pub(crate) fn new(db_path: PathBuf, retry_policy: RetryPolicy) -> Self {
        Self {
            db_path,
            retry_policy,
        }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Retry policy configured for gateways built on this manager.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Runs `f` against a freshly opened database on a blocking thread.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
