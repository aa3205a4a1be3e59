//! Error types for the studio library.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Error type for storage and validation failures.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Studio not found for the given slug
    #[error("Studio '{slug}' not found")]
    StudioNotFound { slug: String },
    /// Item not found for the given ID
    #[error("Item '{id}' not found")]
    ItemNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StudioError {
    /// Creates a database error with a context message.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for failures that may succeed when retried unchanged.
    ///
    /// Only SQLite lock contention counts as transient; validation and
    /// not-found errors never do.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Database {
                source: rusqlite::Error::SqliteFailure(err, _),
                ..
            } => matches!(
                err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StudioError::database_error(message, e))
    }
}

/// Errors surfaced by the optimistic collection controller.
///
/// A no-op reorder is not an error; see
/// [`ReorderOutcome::Unchanged`](crate::controller::ReorderOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Another mutation is in flight for this collection.
    #[error("Another change to this list is still being saved, try again")]
    Busy,
    /// The item is not part of the collection.
    #[error("Item '{id}' is not in this list")]
    NotFound { id: String },
    /// The payload was rejected before reaching persistence.
    #[error("{reason}")]
    Invalid { reason: String },
    /// Persistence failed and the local state was rolled back.
    #[error("{reason}")]
    Persistence { reason: String },
}

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;
