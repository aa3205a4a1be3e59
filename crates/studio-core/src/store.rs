//! In-memory holder of one collection's display order.

use tokio::sync::watch;

use crate::models::{CollectionId, OrderedItem};

/// The authoritative client-side sequence for one collection.
///
/// The store does not validate what it is given: callers load items already
/// sorted by position. Every replacement, including optimistic and rollback
/// states, is published to [`subscribe`](Self::subscribe) receivers.
#[derive(Debug)]
pub struct CollectionStore {
    collection: CollectionId,
    items: watch::Sender<Vec<OrderedItem>>,
}

impl CollectionStore {
    /// Creates an empty store for `collection`.
    pub fn new(collection: CollectionId) -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self { collection, items }
    }

    pub fn collection(&self) -> &CollectionId {
        &self.collection
    }

    /// Replaces the whole sequence.
    pub fn load(&self, items: Vec<OrderedItem>) {
        self.items.send_replace(items);
    }

    /// Returns a copy of the live sequence.
    pub fn current(&self) -> Vec<OrderedItem> {
        self.items.borrow().clone()
    }

    /// Read-only live view of the sequence.
    pub fn subscribe(&self) -> watch::Receiver<Vec<OrderedItem>> {
        self.items.subscribe()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Applies an in-place edit and publishes the result.
    pub(crate) fn modify(&self, edit: impl FnOnce(&mut Vec<OrderedItem>)) {
        self.items.send_modify(edit);
    }
}
