//! Database operations and SQLite management for studios and their items.
//!
//! This module provides the low-level storage for the studio back office. It
//! owns the SQLite connection, schema setup, and the query sets for studios
//! and for ordered collection items. Every multi-row write runs inside a
//! single transaction, so position rewrites are all-or-nothing.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod item_queries;
pub mod migrations;
pub mod studio_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
