//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create, update,
//! and delete operations with consistent messaging and resource display.

use std::fmt;

use crate::{
    controller::ReorderOutcome,
    models::{OrderedItem, Studio},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use studio_core::{
///     display::CreateResult,
///     models::Studio,
/// };
/// use jiff::Timestamp;
///
/// let studio = Studio {
///     slug: "lumen".to_string(),
///     name: "Lumen Photography".to_string(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(studio).to_string();
/// assert!(output.contains("Created studio 'lumen'"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Studio> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created studio '{}'", self.resource.slug)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<OrderedItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added {} with ID: {}",
            self.resource.payload.kind(),
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the changes made, giving users clear feedback about
/// what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<Studio> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated studio '{}'", self.resource.slug)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<OrderedItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Studio> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted studio '{}' ({}) and all of its lists",
            self.resource.name, self.resource.slug
        )
    }
}

impl fmt::Display for DeleteResult<OrderedItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed '{}' (ID: {})",
            self.resource.payload.title(),
            self.resource.id
        )
    }
}

/// Wrapper type for displaying what a reorder did to a collection.
///
/// Holds the collection as it stands after the reorder.
pub struct ReorderResult {
    pub outcome: ReorderOutcome,
    pub items: Vec<OrderedItem>,
}

impl ReorderResult {
    pub fn new(outcome: ReorderOutcome, items: Vec<OrderedItem>) -> Self {
        Self { outcome, items }
    }
}

impl fmt::Display for ReorderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ReorderOutcome::Unchanged => writeln!(f, "Order unchanged.")?,
            ReorderOutcome::Applied(positions) => {
                writeln!(f, "Saved new order for {} items.", positions.len())?
            }
        }
        writeln!(f)?;
        for (index, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {} ({})", index + 1, item.payload.title(), item.id)?;
        }
        Ok(())
    }
}
