//! Studio (tenant) model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Collection;
use crate::error::{Result, StudioError};

/// Maximum slug length accepted on creation.
const MAX_SLUG_LEN: usize = 64;

/// A tenant of the back office. All collections are scoped to a studio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Studio {
    /// Unique URL-safe identifier
    pub slug: String,

    /// Display name
    pub name: String,

    /// Timestamp when the studio was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the studio or any of its items last changed (UTC)
    pub updated_at: Timestamp,
}

impl Studio {
    /// Checks that a slug is 1..=64 characters of `[a-z0-9-]`.
    pub fn validate_slug(slug: &str) -> Result<()> {
        if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
            return Err(StudioError::invalid_input(
                "slug",
                format!("must be between 1 and {MAX_SLUG_LEN} characters"),
            ));
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(StudioError::invalid_input(
                "slug",
                "may only contain lowercase letters, digits and '-'",
            ));
        }
        Ok(())
    }
}

/// A studio together with every one of its collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudioOverview {
    pub studio: Studio,

    /// One entry per [`CollectionKind`](super::CollectionKind), in
    /// [`CollectionKind::ALL`](super::CollectionKind::ALL) order
    pub collections: Vec<Collection>,
}
