//! Data models for studios and their ordered collections.
//!
//! Every user-orderable list in a studio (pipeline stages, phone numbers,
//! commercial conditions, social links) is an ordered collection of
//! [`OrderedItem`]s identified by a [`CollectionId`]. The array order of a
//! collection is what gets displayed; each item's `position` is derived from
//! that order whenever it is persisted.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use studio_core::models::{CollectionId, CollectionKind, ItemPayload};
//!
//! let phones = CollectionId::new("lumen", CollectionKind::PhoneNumber);
//! assert_eq!(phones.to_string(), "lumen/phone_number");
//!
//! let payload = ItemPayload::PhoneNumber {
//!     number: "+34 600 000 000".to_string(),
//!     label: Some("Front desk".to_string()),
//! };
//! assert_eq!(payload.kind(), CollectionKind::PhoneNumber);
//! ```

pub mod collection;
pub mod item;
pub mod studio;


pub use collection::{Collection, CollectionId, CollectionKind, PositionUpdate};
pub use item::{ItemPayload, OrderedItem};
pub use studio::{Studio, StudioOverview};
