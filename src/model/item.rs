//! To-do items and the ordered collection that holds them

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque unique identifier for an item
///
/// Assigned once at creation by an [`IdGenerator`](super::ids::IdGenerator)
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Item
// ============================================================================

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Completion mark, always `false` for fresh items
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            checked: false,
        }
    }
}

/// Whether a title/description pair may be admitted into the list
///
/// With `trim` set, whitespace-only text counts as empty.
pub fn is_admissible(title: &str, description: &str, trim: bool) -> bool {
    if trim {
        !title.trim().is_empty() && !description.trim().is_empty()
    } else {
        !title.is_empty() && !description.is_empty()
    }
}

// ============================================================================
// ItemList
// ============================================================================

/// Ordered collection of items with unique ids
///
/// Order only reflects manual reordering and carries no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Item at a zero-based position
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn find_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Append an item to the end of the list
    ///
    /// Returns `false` and leaves the list untouched if the id is already taken.
    pub fn push(&mut self, item: Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given id, keeping the order of the rest
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Replace the whole order verbatim
    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Check whether `items` holds exactly the same ids as this list
    pub fn is_permutation(&self, items: &[Item]) -> bool {
        if items.len() != self.items.len() {
            return false;
        }
        let ours: HashSet<&ItemId> = self.items.iter().map(|item| &item.id).collect();
        let theirs: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
        theirs.len() == items.len() && ours == theirs
    }

    /// Check the id-uniqueness invariant
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|item| seen.insert(&item.id))
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The order produced by dragging the item at `from` and dropping it at `to`
///
/// Positions are zero-based; `to` is clamped to the list bounds. This is the
/// settled result a drag gesture hands to `ListMsg::Reorder`. Returns `None`
/// when there is nothing at `from` to drag.
pub fn moved(items: &[Item], from: usize, to: usize) -> Option<Vec<Item>> {
    if from >= items.len() {
        return None;
    }
    let mut order = items.to_vec();
    let to = to.min(order.len() - 1);
    let item = order.remove(from);
    order.insert(to, item);
    Some(order)
}
