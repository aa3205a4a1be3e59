//! Gateway persisting collections through the SQLite-backed Manager.

use async_trait::async_trait;
use log::debug;

use super::PersistenceGateway;
use crate::{
    error::Result,
    manager::Manager,
    models::{CollectionId, ItemPayload, OrderedItem, PositionUpdate},
};

/// [`PersistenceGateway`] backed by the studio database.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    manager: Manager,
}

impl SqliteGateway {
    pub fn new(manager: Manager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl PersistenceGateway for SqliteGateway {
    async fn load_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>> {
        self.manager.get_items(collection).await
    }

    async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()> {
        debug!("Persisting {} positions for {collection}", positions.len());
        self.manager.reorder_items(collection, positions).await
    }

    async fn create_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        self.manager.add_item(collection, payload).await
    }

    async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        self.manager.update_item(collection, id, payload).await
    }

    async fn remove_item(&self, collection: &CollectionId, id: &str) -> Result<()> {
        self.manager.remove_item(collection, id).await
    }
}
