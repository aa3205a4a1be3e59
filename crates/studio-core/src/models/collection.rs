//! Collection identity and position types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::OrderedItem;

/// The kinds of user-orderable lists a studio owns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Stages of the sales pipeline
    PipelineStage,

    /// Contact phone numbers
    PhoneNumber,

    /// Commercial conditions offered to clients
    CommercialCondition,

    /// Links to social network profiles
    SocialLink,
}

impl CollectionKind {
    /// All kinds, in the order they are listed for a studio.
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::PipelineStage,
        CollectionKind::PhoneNumber,
        CollectionKind::CommercialCondition,
        CollectionKind::SocialLink,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::PipelineStage => "pipeline_stage",
            CollectionKind::PhoneNumber => "phone_number",
            CollectionKind::CommercialCondition => "commercial_condition",
            CollectionKind::SocialLink => "social_link",
        }
    }

    /// Prefix used when minting item identifiers of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CollectionKind::PipelineStage => "ps",
            CollectionKind::PhoneNumber => "ph",
            CollectionKind::CommercialCondition => "cc",
            CollectionKind::SocialLink => "sl",
        }
    }

    /// Human-readable plural label.
    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::PipelineStage => "Pipeline stages",
            CollectionKind::PhoneNumber => "Phone numbers",
            CollectionKind::CommercialCondition => "Commercial conditions",
            CollectionKind::SocialLink => "Social links",
        }
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pipeline_stage" | "stage" | "stages" => Ok(CollectionKind::PipelineStage),
            "phone_number" | "phone" | "phones" => Ok(CollectionKind::PhoneNumber),
            "commercial_condition" | "condition" | "conditions" => {
                Ok(CollectionKind::CommercialCondition)
            }
            "social_link" | "link" | "links" => Ok(CollectionKind::SocialLink),
            _ => Err(format!("Invalid collection kind: {s}")),
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one logical list: one kind of collection within one studio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CollectionId {
    /// Slug of the owning studio
    pub studio: String,

    /// Which list of the studio
    pub kind: CollectionKind,
}

impl CollectionId {
    pub fn new(studio: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            studio: studio.into(),
            kind,
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.studio, self.kind)
    }
}

/// The persisted rank of one item, as sent to the persistence gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionUpdate {
    pub id: String,
    pub position: u32,
}

impl PositionUpdate {
    pub fn new(id: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// A loaded collection together with its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub id: CollectionId,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<OrderedItem>,
}
