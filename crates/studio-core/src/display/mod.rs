//! Markdown formatting for studios, items and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the newtype wrappers here add list and result context on top. The CLI
//! renders all of it through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers &     │    │   Markdown      │
//! │ (Studio, Item)  │───▶│  Result Types   │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers ([`Items`], [`Studios`])
//! - [`results`]: operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`], [`ReorderResult`])
//! - [`status`]: one-line confirmations ([`OperationStatus`])
//! - [`datetime`]: local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use studio_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Studio saved");
//! assert_eq!(done.to_string(), "Success: Studio saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Items, Studios};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, ReorderResult, UpdateResult};
pub use status::OperationStatus;
