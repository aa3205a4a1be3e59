//! Ordered item operations for the Manager.

use super::Manager;
use crate::{
    error::Result,
    models::{CollectionId, ItemPayload, OrderedItem, PositionUpdate},
};

impl Manager {
    /// Retrieves every item of a collection in position order.
    pub async fn get_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>> {
        let collection = collection.clone();

        self.with_database(move |db| db.get_items(&collection))
            .await
    }

    /// Retrieves a single item.
    pub async fn get_item(
        &self,
        collection: &CollectionId,
        id: &str,
    ) -> Result<Option<OrderedItem>> {
        let collection = collection.clone();
        let id = id.to_string();

        self.with_database(move |db| db.get_item(&collection, &id))
            .await
    }

    /// Appends an item at the end of a collection.
    pub async fn add_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        let collection = collection.clone();

        self.with_database(move |db| db.add_item(&collection, &payload))
            .await
    }

    /// Replaces an item's payload.
    pub async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        let collection = collection.clone();
        let id = id.to_string();

        self.with_database(move |db| db.update_item(&collection, &id, &payload))
            .await
    }

    /// Removes an item and re-compacts the positions after it.
    pub async fn remove_item(&self, collection: &CollectionId, id: &str) -> Result<()> {
        let collection = collection.clone();
        let id = id.to_string();

        self.with_database(move |db| db.remove_item(&collection, &id))
            .await
    }

    /// Atomically rewrites every position of a collection.
    pub async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()> {
        let collection = collection.clone();
        let positions = positions.to_vec();

        self.with_database(move |db| db.reorder_items(&collection, &positions))
            .await
    }
}
