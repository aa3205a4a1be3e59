//! Studio CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::Studio,
};

const CHECK_STUDIO_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM studios WHERE slug = ?1)";
const INSERT_STUDIO_SQL: &str =
    "INSERT INTO studios (slug, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_STUDIO_SQL: &str =
    "SELECT slug, name, created_at, updated_at FROM studios WHERE slug = ?1";
const SELECT_STUDIOS_SQL: &str =
    "SELECT slug, name, created_at, updated_at FROM studios ORDER BY created_at, slug";
const RENAME_STUDIO_SQL: &str = "UPDATE studios SET name = ?1, updated_at = ?2 WHERE slug = ?3";
const DELETE_STUDIO_SQL: &str = "DELETE FROM studios WHERE slug = ?1";
pub(super) const TOUCH_STUDIO_SQL: &str = "UPDATE studios SET updated_at = ?1 WHERE slug = ?2";

impl super::Database {
    /// Helper function to construct a Studio from a database row
    fn build_studio_from_row(row: &rusqlite::Row) -> rusqlite::Result<Studio> {
        Ok(Studio {
            slug: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Returns whether a studio with `slug` exists.
    pub(super) fn studio_exists(conn: &rusqlite::Connection, slug: &str) -> Result<bool> {
        conn.query_row(CHECK_STUDIO_EXISTS_SQL, params![slug], |row| row.get(0))
            .db_context("Failed to check studio existence")
    }

    /// Creates a new studio.
    pub fn create_studio(&mut self, slug: &str, name: &str) -> Result<Studio> {
        Studio::validate_slug(slug)?;
        if name.trim().is_empty() {
            return Err(StudioError::invalid_input("name", "must not be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if Self::studio_exists(&tx, slug)? {
            return Err(StudioError::invalid_input(
                "slug",
                format!("studio '{slug}' already exists"),
            ));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();
        tx.execute(INSERT_STUDIO_SQL, params![slug, name, &now_str, &now_str])
            .db_context("Failed to insert studio")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Studio {
            slug: slug.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a studio by slug.
    pub fn get_studio(&self, slug: &str) -> Result<Option<Studio>> {
        self.connection
            .query_row(SELECT_STUDIO_SQL, params![slug], Self::build_studio_from_row)
            .optional()
            .db_context("Failed to get studio")
    }

    /// Lists all studios, oldest first.
    pub fn list_studios(&self) -> Result<Vec<Studio>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STUDIOS_SQL)
            .db_context("Failed to prepare query")?;

        let studios = stmt
            .query_map([], Self::build_studio_from_row)
            .db_context("Failed to query studios")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch studios")?;

        Ok(studios)
    }

    /// Changes a studio's display name.
    pub fn rename_studio(&mut self, slug: &str, name: &str) -> Result<Studio> {
        if name.trim().is_empty() {
            return Err(StudioError::invalid_input("name", "must not be empty"));
        }

        let now_str = Timestamp::now().to_string();
        let changed = self
            .connection
            .execute(RENAME_STUDIO_SQL, params![name, &now_str, slug])
            .db_context("Failed to rename studio")?;
        if changed == 0 {
            return Err(StudioError::StudioNotFound {
                slug: slug.to_string(),
            });
        }

        self.get_studio(slug)?.ok_or_else(|| StudioError::StudioNotFound {
            slug: slug.to_string(),
        })
    }

    /// Deletes a studio and, through the foreign key cascade, all its items.
    pub fn delete_studio(&mut self, slug: &str) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_STUDIO_SQL, params![slug])
            .db_context("Failed to delete studio")?;

        if deleted == 0 {
            return Err(StudioError::StudioNotFound {
                slug: slug.to_string(),
            });
        }
        Ok(())
    }
}
