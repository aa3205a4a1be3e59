//! Ordered item model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::CollectionKind;
use crate::error::{Result, StudioError};

/// Kind-specific data carried by an item.
///
/// The variant always matches the [`CollectionKind`] of the collection the
/// item belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemPayload {
    PipelineStage {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    PhoneNumber {
        number: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    CommercialCondition {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discount_percent: Option<f64>,
    },
    SocialLink {
        platform: String,
        url: String,
    },
}

impl ItemPayload {
    /// The collection kind this payload belongs to.
    pub fn kind(&self) -> CollectionKind {
        match self {
            ItemPayload::PipelineStage { .. } => CollectionKind::PipelineStage,
            ItemPayload::PhoneNumber { .. } => CollectionKind::PhoneNumber,
            ItemPayload::CommercialCondition { .. } => CollectionKind::CommercialCondition,
            ItemPayload::SocialLink { .. } => CollectionKind::SocialLink,
        }
    }

    /// Short one-line title used in listings.
    pub fn title(&self) -> &str {
        match self {
            ItemPayload::PipelineStage { name, .. } => name,
            ItemPayload::PhoneNumber { number, .. } => number,
            ItemPayload::CommercialCondition { name, .. } => name,
            ItemPayload::SocialLink { platform, .. } => platform,
        }
    }

    /// Validates the payload against the collection it is written to.
    pub fn validate_for(&self, kind: CollectionKind) -> Result<()> {
        if self.kind() != kind {
            return Err(StudioError::invalid_input(
                "payload",
                format!("{} data cannot be stored in a {} list", self.kind(), kind),
            ));
        }

        let (field, value) = match self {
            ItemPayload::PipelineStage { name, .. } => ("name", name),
            ItemPayload::PhoneNumber { number, .. } => ("number", number),
            ItemPayload::CommercialCondition { name, .. } => ("name", name),
            ItemPayload::SocialLink { url, platform } => {
                if platform.trim().is_empty() {
                    return Err(StudioError::invalid_input("platform", "must not be empty"));
                }
                ("url", url)
            }
        };
        if value.trim().is_empty() {
            return Err(StudioError::invalid_input(field, "must not be empty"));
        }

        if let ItemPayload::CommercialCondition {
            discount_percent: Some(discount),
            ..
        } = self
        {
            if !(0.0..=100.0).contains(discount) {
                return Err(StudioError::invalid_input(
                    "discount_percent",
                    format!("{discount} is outside 0..=100"),
                ));
            }
        }

        Ok(())
    }
}

/// One entry of an ordered collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderedItem {
    /// Stable identifier, unique across all collections and never reused
    pub id: String,

    /// Rank within the collection (0-indexed, dense when settled)
    pub position: u32,

    /// Kind-specific data
    pub payload: ItemPayload,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last updated (UTC)
    pub updated_at: Timestamp,
}
