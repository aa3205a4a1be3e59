//! Optimistic mutations of one ordered collection.
//!
//! [`ReorderController`] binds a [`CollectionStore`], a [`ConcurrencyGuard`],
//! a [`PersistenceGateway`] and a [`Notifier`] for a single collection. A
//! reorder is applied to the store before persistence answers; if the
//! gateway fails, the exact pre-mutation sequence is restored and the user
//! is told once.
//!
//! ```text
//!   reorder(intent)
//!        │
//!        ├─ busy? ─────────────────────────────▶ Err(Busy)
//!        ├─ no-op? ────────────────────────────▶ Ok(Unchanged)
//!        ├─ acquire guard, snapshot, publish new sequence
//!        ├─ gateway.reorder_items(positions)
//!        │     ├─ ok ──────────────────────────▶ Ok(Applied)
//!        │     └─ err ─ restore snapshot, notify once
//!        │                                ────▶ Err(Persistence)
//!        └─ guard released on every path
//! ```
//!
//! The snapshot is only discarded once the gateway confirms the write.
//! Dropping a pending `reorder` or `remove` future restores it before the
//! guard is released, so the store never keeps an order that was not
//! confirmed. A write already handed to storage may still land; call
//! [`refresh`](ReorderController::refresh) to pick it up.
//!
//! # Example
//!
//! ```rust,no_run
//! use studio_core::{
//!     controller::ReorderController,
//!     gateway::SqliteGateway,
//!     models::{CollectionId, CollectionKind},
//!     reorder::{Direction, ReorderIntent},
//!     ManagerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ManagerBuilder::new().build().await?;
//! let stages = CollectionId::new("lumen", CollectionKind::PipelineStage);
//! let controller = ReorderController::new(stages, SqliteGateway::new(manager));
//!
//! controller.refresh().await?;
//! controller
//!     .reorder(&ReorderIntent::step(1, Direction::Up))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::{
    error::{ReorderError, StudioError},
    gateway::PersistenceGateway,
    guard::ConcurrencyGuard,
    models::{CollectionId, ItemPayload, OrderedItem, PositionUpdate},
    notify::{LogNotifier, Notifier},
    reorder::{self, ReorderIntent},
    store::CollectionStore,
};


const REORDER_FAILED: &str = "Could not save the new order. The previous order has been restored.";
const REMOVE_FAILED: &str = "Could not remove the item. The list has been restored.";
const CREATE_FAILED: &str = "Could not add the item.";
const UPDATE_FAILED: &str = "Could not save changes to the item.";
const REFRESH_FAILED: &str = "Could not load the list.";

/// What a reorder request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The intent did not change the order; nothing was persisted.
    Unchanged,

    /// The new order was persisted with these positions.
    Applied(Vec<PositionUpdate>),
}

impl ReorderOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReorderOutcome::Applied(_))
    }
}

/// Restores a snapshot when dropped, unless the write was confirmed.
struct Rollback<'a> {
    store: &'a CollectionStore,
    snapshot: Option<Vec<OrderedItem>>,
}

impl<'a> Rollback<'a> {
    fn arm(store: &'a CollectionStore, snapshot: Vec<OrderedItem>) -> Self {
        Self {
            store,
            snapshot: Some(snapshot),
        }
    }

    fn disarm(mut self) {
        self.snapshot = None;
    }
}

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            debug!("Restoring previous order of {}", self.store.collection());
            self.store.load(snapshot);
        }
    }
}

/// Serialized, optimistic mutator of one collection.
pub struct ReorderController<G, N = LogNotifier> {
    store: CollectionStore,
    guard: ConcurrencyGuard,
    gateway: G,
    notifier: N,
}

impl<G> ReorderController<G, LogNotifier>
where
    G: PersistenceGateway,
{
    /// Creates a controller that reports failures through the log.
    pub fn new(collection: CollectionId, gateway: G) -> Self {
        Self::with_notifier(collection, gateway, LogNotifier)
    }
}

impl<G, N> ReorderController<G, N>
where
    G: PersistenceGateway,
    N: Notifier,
{
    pub fn with_notifier(collection: CollectionId, gateway: G, notifier: N) -> Self {
        Self {
            store: CollectionStore::new(collection),
            guard: ConcurrencyGuard::new(),
            gateway,
            notifier,
        }
    }

    pub fn collection(&self) -> &CollectionId {
        self.store.collection()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Replaces the local sequence without touching persistence.
    pub fn load(&self, items: Vec<OrderedItem>) {
        self.store.load(items);
    }

    pub fn current(&self) -> Vec<OrderedItem> {
        self.store.current()
    }

    /// Read-only live view, including optimistic and rolled back states.
    pub fn subscribe(&self) -> watch::Receiver<Vec<OrderedItem>> {
        self.store.subscribe()
    }

    /// True while a mutation is waiting on persistence.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Reloads the sequence from persistence.
    pub async fn refresh(&self) -> Result<usize, ReorderError> {
        let _permit = self.guard.try_acquire().ok_or(ReorderError::Busy)?;

        match self.gateway.load_items(self.collection()).await {
            Ok(items) => {
                let count = items.len();
                debug!("Loaded {count} items for {}", self.collection());
                self.store.load(items);
                Ok(count)
            }
            Err(e) => Err(self.report("refresh", e, REFRESH_FAILED)),
        }
    }

    /// Applies `intent` optimistically and persists the new positions.
    ///
    /// # Errors
    ///
    /// Returns `ReorderError::Busy` without side effects when another
    /// mutation is in flight, and `ReorderError::Persistence` after rolling
    /// back when the gateway fails.
    pub async fn reorder(&self, intent: &ReorderIntent) -> Result<ReorderOutcome, ReorderError> {
        if self.guard.is_busy() {
            debug!("Rejecting '{intent}' on {}: busy", self.collection());
            return Err(ReorderError::Busy);
        }

        if reorder::compute(&self.store.current(), intent).is_none() {
            debug!("Ignoring '{intent}' on {}: no-op", self.collection());
            return Ok(ReorderOutcome::Unchanged);
        }

        let _permit = self.guard.try_acquire().ok_or(ReorderError::Busy)?;

        let snapshot = self.store.current();
        let Some(reordered) = reorder::compute(&snapshot, intent) else {
            return Ok(ReorderOutcome::Unchanged);
        };

        debug!("Applying '{intent}' to {}", self.collection());
        let rollback = Rollback::arm(&self.store, snapshot);
        self.store.load(reordered.sequence);

        match self
            .gateway
            .reorder_items(self.collection(), &reordered.positions)
            .await
        {
            Ok(()) => {
                rollback.disarm();
                info!("Reordered {} ({intent})", self.collection());
                Ok(ReorderOutcome::Applied(reordered.positions))
            }
            Err(e) => {
                drop(rollback);
                Err(self.report("reorder", e, REORDER_FAILED))
            }
        }
    }

    /// Removes an item optimistically, re-compacting the positions after it.
    pub async fn remove(&self, id: &str) -> Result<(), ReorderError> {
        let _permit = self.guard.try_acquire().ok_or(ReorderError::Busy)?;

        let snapshot = self.store.current();
        let Some(index) = snapshot.iter().position(|item| item.id == id) else {
            return Err(ReorderError::NotFound { id: id.to_string() });
        };

        let mut remaining = snapshot.clone();
        remaining.remove(index);
        reorder::compact(&mut remaining);
        let rollback = Rollback::arm(&self.store, snapshot);
        self.store.load(remaining);

        match self.gateway.remove_item(self.collection(), id).await {
            Ok(()) => {
                rollback.disarm();
                info!("Removed {id} from {}", self.collection());
                Ok(())
            }
            Err(e) => {
                drop(rollback);
                Err(self.report("remove", e, REMOVE_FAILED))
            }
        }
    }

    /// Persists a new item and appends it once storage has assigned its id.
    pub async fn create(&self, payload: ItemPayload) -> Result<OrderedItem, ReorderError> {
        self.check_payload(&payload)?;
        let _permit = self.guard.try_acquire().ok_or(ReorderError::Busy)?;

        match self.gateway.create_item(self.collection(), payload).await {
            Ok(item) => {
                info!("Added {} to {}", item.id, self.collection());
                self.store.modify(|items| items.push(item.clone()));
                Ok(item)
            }
            Err(e) => Err(self.report("create", e, CREATE_FAILED)),
        }
    }

    /// Persists a new payload for `id`, then replaces the local entry.
    pub async fn update(
        &self,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem, ReorderError> {
        self.check_payload(&payload)?;
        let _permit = self.guard.try_acquire().ok_or(ReorderError::Busy)?;

        if !self.store.current().iter().any(|item| item.id == id) {
            return Err(ReorderError::NotFound { id: id.to_string() });
        }

        match self
            .gateway
            .update_item(self.collection(), id, payload)
            .await
        {
            Ok(item) => {
                self.store.modify(|items| {
                    if let Some(slot) = items.iter_mut().find(|slot| slot.id == item.id) {
                        let position = slot.position;
                        *slot = OrderedItem {
                            position,
                            ..item.clone()
                        };
                    }
                });
                Ok(item)
            }
            Err(e) => Err(self.report("update", e, UPDATE_FAILED)),
        }
    }

    fn check_payload(&self, payload: &ItemPayload) -> Result<(), ReorderError> {
        payload
            .validate_for(self.collection().kind)
            .map_err(|e| ReorderError::Invalid {
                reason: e.to_string(),
            })
    }

    /// Logs the cause and emits the single user notification for a failure.
    fn report(&self, operation: &str, cause: StudioError, message: &str) -> ReorderError {
        warn!("{operation} failed for {}: {cause}", self.collection());
        self.notifier.notify_error(message);
        ReorderError::Persistence {
            reason: message.to_string(),
        }
    }
}
