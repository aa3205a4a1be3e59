//! Parameter structures for studio operations
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` impls, keeping clap out of the
//! core crate:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Manager /    │
//! │  (clap derives) │───▶│ (serde only)    │───▶│   Controller    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    models::{CollectionId, ItemPayload},
    reorder::ReorderIntent,
};

/// Parameters for operations requiring just a studio slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slug {
    /// The slug of the studio to operate on
    pub slug: String,
}

/// Parameters for creating a new studio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStudio {
    /// Unique slug: lowercase letters, digits and '-'
    pub slug: String,
    /// Display name
    pub name: String,
}

/// Parameters for renaming a studio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameStudio {
    pub slug: String,
    /// New display name
    pub name: String,
}

/// Parameters for appending an item to a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItem {
    pub collection: CollectionId,
    pub payload: ItemPayload,
}

/// Parameters identifying one item of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub collection: CollectionId,
    pub id: String,
}

/// Parameters for reordering a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reorder {
    pub collection: CollectionId,
    pub intent: ReorderIntent,
}
