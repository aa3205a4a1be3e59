//! Core library for studio management and its ordered collections.
//!
//! A studio owns several user-orderable lists: pipeline stages, phone
//! numbers, commercial conditions and social links. They all share one
//! optimistic reordering protocol:
//!
//! - [`store`]: the in-memory display order of one collection
//! - [`reorder`]: pure computation of drag and step moves
//! - [`guard`]: at most one mutation in flight per collection
//! - [`gateway`]: the persistence boundary, backed by SQLite
//! - [`controller`]: applies moves optimistically and rolls back on failure
//!
//! Studios and items are stored through the async [`Manager`] facade.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studio_core::{
//!     controller::ReorderController,
//!     gateway::{RetryingGateway, SqliteGateway},
//!     models::{CollectionId, CollectionKind, ItemPayload},
//!     params::CreateStudio,
//!     reorder::ReorderIntent,
//!     ManagerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ManagerBuilder::new()
//!     .with_database_path(Some("studio.db"))
//!     .build()
//!     .await?;
//!
//! manager
//!     .create_studio(&CreateStudio {
//!         slug: "lumen".to_string(),
//!         name: "Lumen Photography".to_string(),
//!     })
//!     .await?;
//!
//! let phones = CollectionId::new("lumen", CollectionKind::PhoneNumber);
//! let gateway = RetryingGateway::new(SqliteGateway::new(manager.clone()), manager.retry_policy());
//! let controller = ReorderController::new(phones, gateway);
//!
//! let first = controller
//!     .create(ItemPayload::PhoneNumber {
//!         number: "+34 600 000 001".to_string(),
//!         label: None,
//!     })
//!     .await?;
//! let second = controller
//!     .create(ItemPayload::PhoneNumber {
//!         number: "+34 600 000 002".to_string(),
//!         label: Some("Bookings".to_string()),
//!     })
//!     .await?;
//!
//! controller
//!     .reorder(&ReorderIntent::drag(&second.id, &first.id))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod manager;
pub mod models;
pub mod notify;
pub mod params;
pub mod reorder;
pub mod store;

// Re-export commonly used types
pub use controller::{ReorderController, ReorderOutcome};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Items, OperationStatus, ReorderResult, Studios, UpdateResult,
};
pub use error::{ReorderError, Result, StudioError};
pub use gateway::{PersistenceGateway, RetryPolicy, RetryingGateway, SqliteGateway};
pub use manager::{Manager, ManagerBuilder};
pub use models::{
    Collection, CollectionId, CollectionKind, ItemPayload, OrderedItem, PositionUpdate, Studio,
    StudioOverview,
};
pub use notify::{LogNotifier, Notifier};
pub use reorder::{Direction, ReorderIntent};
