#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use studio_core::{
    gateway::PersistenceGateway, notify::Notifier, params::CreateStudio, CollectionId,
    ItemPayload, Manager, ManagerBuilder, OrderedItem, PositionUpdate, StudioError,
};
use tempfile::TempDir;

/// Helper function to create a test manager
pub async fn create_test_manager() -> (TempDir, Manager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = ManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create manager");
    (temp_dir, manager)
}

/// Creates a studio and fills `collection` with pipeline stages.
pub async fn seed_stages(manager: &Manager, collection: &CollectionId, names: &[&str]) -> Vec<OrderedItem> {
    manager
        .create_studio(&CreateStudio {
            slug: collection.studio.clone(),
            name: "Test Studio".to_string(),
        })
        .await
        .expect("Failed to create studio");

    let mut items = Vec::new();
    for name in names {
        let item = manager
            .add_item(
                collection,
                ItemPayload::PipelineStage {
                    name: name.to_string(),
                    color: None,
                },
            )
            .await
            .expect("Failed to add item");
        items.push(item);
    }
    items
}

pub fn titles(items: &[OrderedItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.payload.title().to_string())
        .collect()
}

/// Gateway wrapper whose writes can be switched to fail.
pub struct Switchable<G> {
    pub inner: G,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl<G> Switchable<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> studio_core::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StudioError::Configuration {
                message: "socket closed by remote".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<G: PersistenceGateway> PersistenceGateway for Switchable<G> {
    async fn load_items(&self, collection: &CollectionId) -> studio_core::Result<Vec<OrderedItem>> {
        self.inner.load_items(collection).await
    }

    async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> studio_core::Result<()> {
        self.check()?;
        self.inner.reorder_items(collection, positions).await
    }

    async fn create_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> studio_core::Result<OrderedItem> {
        self.check()?;
        self.inner.create_item(collection, payload).await
    }

    async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> studio_core::Result<OrderedItem> {
        self.check()?;
        self.inner.update_item(collection, id, payload).await
    }

    async fn remove_item(&self, collection: &CollectionId, id: &str) -> studio_core::Result<()> {
        self.check()?;
        self.inner.remove_item(collection, id).await
    }
}

/// Notifier that keeps every message it is given.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
