//! Pure reorder computation over ordered collections.
//!
//! A reorder intent is turned into a new full sequence plus the list of
//! `{id, position}` pairs that persistence needs. Nothing here touches the
//! store or the database, so drag gestures, step buttons and CLI commands all
//! share the same arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{OrderedItem, PositionUpdate};

/// Direction of a one-step move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0
    Up,

    /// Towards the end of the list
    Down,
}

/// A request to move one item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReorderIntent {
    /// Drop `source_id` onto the slot currently held by `target_id`.
    Drag { source_id: String, target_id: String },

    /// Swap the item at `index` with its neighbour in `direction`.
    Step { index: usize, direction: Direction },
}

impl ReorderIntent {
    pub fn drag(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::Drag {
            source_id: source_id.into(),
            target_id: target_id.into(),
        }
    }

    pub fn step(index: usize, direction: Direction) -> Self {
        Self::Step { index, direction }
    }
}

impl fmt::Display for ReorderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderIntent::Drag {
                source_id,
                target_id,
            } => write!(f, "drag {source_id} onto {target_id}"),
            ReorderIntent::Step { index, direction } => {
                let dir = match direction {
                    Direction::Up => "up",
                    Direction::Down => "down",
                };
                write!(f, "move #{index} {dir}")
            }
        }
    }
}

/// The result of a reorder that changes something.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordered {
    /// New display order with every `position` rewritten to its index
    pub sequence: Vec<OrderedItem>,

    /// Dense positions to persist, one per item
    pub positions: Vec<PositionUpdate>,
}

/// Computes the effect of `intent` on `items`.
///
/// Returns `None` when the intent is a no-op: dragging an item onto itself,
/// naming an id that is not in the collection, or stepping past either end.
pub fn compute(items: &[OrderedItem], intent: &ReorderIntent) -> Option<Reordered> {
    let mut sequence = items.to_vec();

    match intent {
        ReorderIntent::Drag {
            source_id,
            target_id,
        } => {
            if source_id == target_id {
                return None;
            }
            let from = index_of(items, source_id)?;
            let to = index_of(items, target_id)?;
            let moved = sequence.remove(from);
            sequence.insert(to, moved);
        }
        ReorderIntent::Step { index, direction } => {
            let index = *index;
            if index >= items.len() {
                return None;
            }
            let neighbour = match direction {
                Direction::Up => index.checked_sub(1)?,
                Direction::Down => index + 1,
            };
            if neighbour >= items.len() {
                return None;
            }
            sequence.swap(index, neighbour);
        }
    }

    compact(&mut sequence);
    let positions = reindex(&sequence);
    Some(Reordered {
        sequence,
        positions,
    })
}

/// Returns the `{id, position}` pairs that make `items` dense in array order.
pub fn reindex(items: &[OrderedItem]) -> Vec<PositionUpdate> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| PositionUpdate::new(item.id.clone(), index as u32))
        .collect()
}

/// Rewrites every item's `position` to its array index.
pub fn compact(items: &mut [OrderedItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.position = index as u32;
    }
}

/// True when positions are exactly `0..N` in array order.
pub fn is_dense(items: &[OrderedItem]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.position as usize == index)
}

fn index_of(items: &[OrderedItem], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}
