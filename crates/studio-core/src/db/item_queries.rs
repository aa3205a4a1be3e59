//! Ordered item CRUD operations and position rewrites.
//!
//! Positions are unique per collection (`UNIQUE (studio_slug, kind,
//! position)`), so every bulk rewrite first parks the affected rows on
//! distinct negative positions and then writes the final values.

use std::collections::HashSet;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use super::studio_queries::TOUCH_STUDIO_SQL;
use crate::{
    error::{DatabaseResultExt, Result, StudioError},
    models::{CollectionId, CollectionKind, ItemPayload, OrderedItem, PositionUpdate},
};

const GET_NEXT_POSITION_SQL: &str =
    "SELECT COALESCE(MAX(position), -1) + 1 FROM items WHERE studio_slug = ?1 AND kind = ?2";
const INSERT_ITEM_SQL: &str = "INSERT INTO items (studio_slug, kind, position, payload, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_ITEMS_SQL: &str = "SELECT seq, kind, position, payload, created_at, updated_at FROM items WHERE studio_slug = ?1 AND kind = ?2 ORDER BY position";
const SELECT_ITEM_SQL: &str = "SELECT seq, kind, position, payload, created_at, updated_at FROM items WHERE seq = ?1 AND studio_slug = ?2 AND kind = ?3";
const SELECT_ITEM_SEQS_SQL: &str = "SELECT seq FROM items WHERE studio_slug = ?1 AND kind = ?2";
const SELECT_ITEM_POSITION_SQL: &str =
    "SELECT position FROM items WHERE seq = ?1 AND studio_slug = ?2 AND kind = ?3";
const UPDATE_ITEM_PAYLOAD_SQL: &str = "UPDATE items SET payload = ?1, updated_at = ?2 WHERE seq = ?3 AND studio_slug = ?4 AND kind = ?5";
const PARK_ALL_POSITIONS_SQL: &str =
    "UPDATE items SET position = -1 - position WHERE studio_slug = ?1 AND kind = ?2";
const UPDATE_ITEM_POSITION_SQL: &str = "UPDATE items SET position = ?1 WHERE seq = ?2";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE seq = ?1";
const PARK_TRAILING_POSITIONS_SQL: &str =
    "UPDATE items SET position = -position WHERE studio_slug = ?1 AND kind = ?2 AND position > ?3";
const CLOSE_POSITION_GAP_SQL: &str = "UPDATE items SET position = -position - 1 WHERE studio_slug = ?1 AND kind = ?2 AND position < 0";

/// Formats the public id of an item row.
fn item_id(kind: CollectionKind, seq: i64) -> String {
    format!("{}_{seq}", kind.id_prefix())
}

/// Extracts the row sequence from a public id of the collection's kind.
fn parse_item_id(collection: &CollectionId, id: &str) -> Option<i64> {
    let (prefix, seq) = id.split_once('_')?;
    if prefix != collection.kind.id_prefix() {
        return None;
    }
    seq.parse().ok()
}

fn item_not_found(id: &str) -> StudioError {
    StudioError::ItemNotFound { id: id.to_string() }
}

impl super::Database {
    /// Helper function to construct an OrderedItem from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<OrderedItem> {
        let seq: i64 = row.get(0)?;
        let kind_str: String = row.get(1)?;
        let kind: CollectionKind = kind_str.parse().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Text,
                format!("Invalid collection kind: {kind_str}").into(),
            )
        })?;
        let payload: ItemPayload = serde_json::from_str(&row.get::<_, String>(3)?)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(OrderedItem {
            id: item_id(kind, seq),
            position: row.get::<_, i64>(2)? as u32,
            payload,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
        })
    }

    fn ensure_studio(conn: &rusqlite::Connection, collection: &CollectionId) -> Result<()> {
        if Self::studio_exists(conn, &collection.studio)? {
            Ok(())
        } else {
            Err(StudioError::StudioNotFound {
                slug: collection.studio.clone(),
            })
        }
    }

    /// Retrieves every item of a collection in position order.
    pub fn get_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>> {
        Self::ensure_studio(&self.connection, collection)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(
                params![&collection.studio, collection.kind.as_str()],
                Self::build_item_from_row,
            )
            .db_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch items")?;

        Ok(items)
    }

    /// Retrieves a single item of a collection.
    pub fn get_item(&self, collection: &CollectionId, id: &str) -> Result<Option<OrderedItem>> {
        let Some(seq) = parse_item_id(collection, id) else {
            return Ok(None);
        };

        self.connection
            .query_row(
                SELECT_ITEM_SQL,
                params![seq, &collection.studio, collection.kind.as_str()],
                Self::build_item_from_row,
            )
            .optional()
            .db_context("Failed to get item")
    }

    /// Appends a new item at the end of a collection (`position = len`).
    pub fn add_item(
        &mut self,
        collection: &CollectionId,
        payload: &ItemPayload,
    ) -> Result<OrderedItem> {
        payload.validate_for(collection.kind)?;
        let payload_json = serde_json::to_string(payload)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_studio(&tx, collection)?;

        let next_position: i64 = tx
            .query_row(
                GET_NEXT_POSITION_SQL,
                params![&collection.studio, collection.kind.as_str()],
                |row| row.get(0),
            )
            .db_context("Failed to get next item position")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ITEM_SQL,
            params![
                &collection.studio,
                collection.kind.as_str(),
                next_position,
                &payload_json,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert item")?;

        let seq = tx.last_insert_rowid();

        tx.execute(TOUCH_STUDIO_SQL, params![&now_str, &collection.studio])
            .db_context("Failed to update studio timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(OrderedItem {
            id: item_id(collection.kind, seq),
            position: next_position as u32,
            payload: payload.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces an item's payload, leaving its position untouched.
    pub fn update_item(
        &mut self,
        collection: &CollectionId,
        id: &str,
        payload: &ItemPayload,
    ) -> Result<OrderedItem> {
        payload.validate_for(collection.kind)?;
        let seq = parse_item_id(collection, id).ok_or_else(|| item_not_found(id))?;
        let payload_json = serde_json::to_string(payload)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        let changed = tx
            .execute(
                UPDATE_ITEM_PAYLOAD_SQL,
                params![
                    &payload_json,
                    &now_str,
                    seq,
                    &collection.studio,
                    collection.kind.as_str()
                ],
            )
            .db_context("Failed to update item")?;
        if changed == 0 {
            return Err(item_not_found(id));
        }

        let item = tx
            .query_row(
                SELECT_ITEM_SQL,
                params![seq, &collection.studio, collection.kind.as_str()],
                Self::build_item_from_row,
            )
            .db_context("Failed to query updated item")?;

        tx.execute(TOUCH_STUDIO_SQL, params![&now_str, &collection.studio])
            .db_context("Failed to update studio timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(item)
    }

    /// Removes an item and closes the gap it leaves behind.
    pub fn remove_item(&mut self, collection: &CollectionId, id: &str) -> Result<()> {
        let seq = parse_item_id(collection, id).ok_or_else(|| item_not_found(id))?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let position: i64 = tx
            .query_row(
                SELECT_ITEM_POSITION_SQL,
                params![seq, &collection.studio, collection.kind.as_str()],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to query item")?
            .ok_or_else(|| item_not_found(id))?;

        tx.execute(DELETE_ITEM_SQL, params![seq])
            .db_context("Failed to delete item")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            PARK_TRAILING_POSITIONS_SQL,
            params![&collection.studio, collection.kind.as_str(), position],
        )
        .db_context("Failed to park trailing positions")?;
        tx.execute(
            CLOSE_POSITION_GAP_SQL,
            params![&collection.studio, collection.kind.as_str()],
        )
        .db_context("Failed to close position gap")?;

        tx.execute(TOUCH_STUDIO_SQL, params![&now_str, &collection.studio])
            .db_context("Failed to update studio timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Atomically rewrites every position of a collection.
    ///
    /// `positions` must name every item of the collection exactly once and
    /// assign the dense range `0..N`. Anything else is rejected before a
    /// single row is written.
    pub fn reorder_items(
        &mut self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_studio(&tx, collection)?;

        let stored: HashSet<i64> = {
            let mut stmt = tx
                .prepare(SELECT_ITEM_SEQS_SQL)
                .db_context("Failed to prepare query")?;
            // Bound to a local so the statement outlives the row iterator
            let seqs = stmt
                .query_map(
                    params![&collection.studio, collection.kind.as_str()],
                    |row| row.get(0),
                )
                .db_context("Failed to query items")?
                .collect::<std::result::Result<HashSet<i64>, _>>()
                .db_context("Failed to fetch items")?;
            seqs
        };

        let targets = validate_positions(collection, &stored, positions)?;

        let now_str = Timestamp::now().to_string();

        tx.execute(
            PARK_ALL_POSITIONS_SQL,
            params![&collection.studio, collection.kind.as_str()],
        )
        .db_context("Failed to park item positions")?;

        for (seq, position) in targets {
            tx.execute(UPDATE_ITEM_POSITION_SQL, params![position as i64, seq])
                .db_context("Failed to update item position")?;
        }

        tx.execute(TOUCH_STUDIO_SQL, params![&now_str, &collection.studio])
            .db_context("Failed to update studio timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}

/// Checks that `positions` is a dense permutation over exactly the stored
/// rows and returns `(seq, position)` pairs to write.
fn validate_positions(
    collection: &CollectionId,
    stored: &HashSet<i64>,
    positions: &[PositionUpdate],
) -> Result<Vec<(i64, u32)>> {
    if positions.len() != stored.len() {
        return Err(StudioError::invalid_input(
            "positions",
            format!(
                "expected {} entries for {collection}, got {}",
                stored.len(),
                positions.len()
            ),
        ));
    }

    let mut seen_seqs = HashSet::with_capacity(positions.len());
    let mut seen_positions = HashSet::with_capacity(positions.len());
    let mut targets = Vec::with_capacity(positions.len());

    for update in positions {
        let seq = parse_item_id(collection, &update.id)
            .filter(|seq| stored.contains(seq))
            .ok_or_else(|| {
                StudioError::invalid_input(
                    "positions",
                    format!("'{}' is not an item of {collection}", update.id),
                )
            })?;
        if !seen_seqs.insert(seq) {
            return Err(StudioError::invalid_input(
                "positions",
                format!("'{}' appears more than once", update.id),
            ));
        }
        if update.position as usize >= positions.len() || !seen_positions.insert(update.position)
        {
            return Err(StudioError::invalid_input(
                "positions",
                format!(
                    "position {} is duplicated or outside 0..{}",
                    update.position,
                    positions.len()
                ),
            ));
        }
        targets.push((seq, update.position));
    }

    Ok(targets)
}
