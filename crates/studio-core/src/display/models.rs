//! Display implementations for domain models.
//!
//! Everything renders as markdown for the CLI's terminal renderer. Items are
//! numbered by rank (`position + 1`), not by id, so the listing reads in the
//! same order the user arranged it.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Collection, ItemPayload, OrderedItem, Studio, StudioOverview};

impl fmt::Display for ItemPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemPayload::PipelineStage { color, .. } => {
                if let Some(color) = color {
                    writeln!(f, "- **Color**: {color}")?;
                }
            }
            ItemPayload::PhoneNumber { label, .. } => {
                if let Some(label) = label {
                    writeln!(f, "- **Label**: {label}")?;
                }
            }
            ItemPayload::CommercialCondition {
                description,
                discount_percent,
                ..
            } => {
                if let Some(discount) = discount_percent {
                    writeln!(f, "- **Discount**: {discount}%")?;
                }
                if let Some(description) = description {
                    writeln!(f)?;
                    writeln!(f, "{description}")?;
                }
            }
            ItemPayload::SocialLink { url, .. } => {
                writeln!(f, "- **URL**: {url}")?;
            }
        }
        Ok(())
    }
}

/// An item headed by its 1-based rank in the list that holds it.
///
/// Lists number their items by index so the ranks printed always match the
/// ones `item up` and `item down` accept, whatever positions were loaded.
pub struct Ranked<'a>(pub usize, pub &'a OrderedItem);

impl fmt::Display for Ranked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ranked(rank, item) = self;
        writeln!(f, "### {rank}. {} ({})", item.payload.title(), item.id)?;
        writeln!(f)?;
        write!(f, "{}", item.payload)?;
        writeln!(f)
    }
}

impl fmt::Display for OrderedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ranked(self.position as usize + 1, self))
    }
}

impl fmt::Display for Studio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.slug)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.id.kind.label())?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "Nothing here yet.")?;
            return writeln!(f);
        }

        for (index, item) in self.items.iter().enumerate() {
            write!(f, "{}", Ranked(index + 1, item))?;
        }
        Ok(())
    }
}

impl fmt::Display for StudioOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.studio)?;
        for collection in &self.collections {
            writeln!(f)?;
            write!(f, "{collection}")?;
        }
        Ok(())
    }
}
