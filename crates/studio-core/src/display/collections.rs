//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use super::models::Ranked;
use crate::models::{OrderedItem, Studio};

/// Newtype wrapper for displaying the items of one ordered collection.
///
/// Items are printed in the order they are held, so a wrapper built from a
/// store snapshot shows exactly what the user sees.
///
/// # Examples
///
/// ```rust
/// use studio_core::{
///     display::Items,
///     models::{ItemPayload, OrderedItem},
/// };
/// use jiff::Timestamp;
///
/// let item = OrderedItem {
///     id: "ph_1".to_string(),
///     position: 0,
///     payload: ItemPayload::PhoneNumber {
///         number: "+34 600 000 000".to_string(),
///         label: Some("Front desk".to_string()),
///     },
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = Items(vec![item]).to_string();
/// assert!(output.contains("1. +34 600 000 000"));
/// ```
pub struct Items(pub Vec<OrderedItem>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderedItem> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = OrderedItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a OrderedItem;
    type IntoIter = std::slice::Iter<'a, OrderedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for (index, item) in self.0.iter().enumerate() {
                write!(f, "{}", Ranked(index + 1, item))?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of studios.
pub struct Studios(pub Vec<Studio>);

impl Studios {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Studios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No studios found.");
        }

        for studio in &self.0 {
            writeln!(f, "- **{}**: {}", studio.slug, studio.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::ItemPayload;

    fn create_test_stage(id: &str, position: u32, name: &str) -> OrderedItem {
        OrderedItem {
            id: id.to_string(),
            position,
            payload: ItemPayload::PipelineStage {
                name: name.to_string(),
                color: Some("amber".to_string()),
            },
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_items_display_empty() {
        assert_eq!(Items(vec![]).to_string(), "No items found.\n");
    }

    #[test]
    fn test_items_display_in_held_order() {
        let items = Items(vec![
            create_test_stage("ps_2", 0, "Contacted"),
            create_test_stage("ps_1", 1, "Lead"),
        ]);
        let output = items.to_string();

        let contacted = output.find("1. Contacted (ps_2)").unwrap();
        let lead = output.find("2. Lead (ps_1)").unwrap();
        assert!(contacted < lead);
        assert!(output.contains("- **Color**: amber"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "ps_1");
    }

    #[test]
    fn test_items_rank_by_index_not_stored_position() {
        let items = Items(vec![
            create_test_stage("ps_1", 3, "Lead"),
            create_test_stage("ps_2", 3, "Contacted"),
        ]);
        let output = items.to_string();

        assert!(output.contains("### 1. Lead (ps_1)"));
        assert!(output.contains("### 2. Contacted (ps_2)"));
    }

    #[test]
    fn test_studios_display() {
        assert_eq!(Studios(vec![]).to_string(), "No studios found.\n");

        let studios = Studios(vec![Studio {
            slug: "lumen".to_string(),
            name: "Lumen Photography".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }]);
        assert_eq!(studios.to_string(), "- **lumen**: Lumen Photography\n");
    }
}
