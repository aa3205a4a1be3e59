//! The persistence boundary of ordered collections.
//!
//! [`PersistenceGateway`] is what the
//! [`ReorderController`](crate::controller::ReorderController) talks to. A
//! gateway call is atomic from the caller's point of view: it either fully
//! succeeds or fully fails, and the controller only ever sees the final
//! outcome.
//!
//! - [`SqliteGateway`] persists through the [`Manager`](crate::Manager)
//!   facade.
//! - [`RetryingGateway`] wraps any gateway and retries transient failures
//!   with exponential backoff before surfacing the last error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CollectionId, ItemPayload, OrderedItem, PositionUpdate},
};

pub mod retry;
pub mod sqlite;

pub use retry::{RetryPolicy, RetryingGateway};
pub use sqlite::SqliteGateway;

/// Durable storage of ordered collections.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Loads a collection sorted by position.
    async fn load_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>>;

    /// Rewrites every position of `collection` at once.
    ///
    /// `positions` covers each item exactly once with the dense range
    /// `0..N`; either all of them are stored or none are.
    async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()>;

    /// Appends a new item, assigning its id and `position = len`.
    async fn create_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> Result<OrderedItem>;

    /// Replaces an item's payload.
    async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem>;

    /// Deletes an item and re-compacts the positions after it.
    async fn remove_item(&self, collection: &CollectionId, id: &str) -> Result<()>;
}

#[async_trait]
impl<G> PersistenceGateway for Arc<G>
where
    G: PersistenceGateway + ?Sized,
{
    async fn load_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>> {
        (**self).load_items(collection).await
    }

    async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()> {
        (**self).reorder_items(collection, positions).await
    }

    async fn create_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        (**self).create_item(collection, payload).await
    }

    async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        (**self).update_item(collection, id, payload).await
    }

    async fn remove_item(&self, collection: &CollectionId, id: &str) -> Result<()> {
        (**self).remove_item(collection, id).await
    }
}
