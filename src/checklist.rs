//! Checklist editing state
//!
//! In-memory item list for a note being authored or edited. Owns order
//! assignment; validation and network concerns live elsewhere.

use crate::models::ChecklistItem;

/// Mutable checklist for a single note draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistEditor {
    items: Vec<ChecklistItem>,
}

impl ChecklistEditor {
    /// Empty checklist for a new note
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a persisted note's items when editing an existing note
    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    /// Append a new item and return its assigned order.
    ///
    /// The assigned order is one more than the largest order currently
    /// present, so it is strictly greater than every remaining item's
    /// order.
    pub fn add(&mut self, text: impl Into<String>, is_done: bool) -> i64 {
        let order = self.next_order();
        self.items.push(ChecklistItem::new(text, order, is_done));
        order
    }

    /// Remove the item with the given order.
    ///
    /// Remaining items keep their orders, so deletions leave gaps.
    /// Returns false when no item matched.
    pub fn remove(&mut self, order: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.order != order);
        self.items.len() != before
    }

    /// Flip completion on the item with the given order.
    ///
    /// Every other item is left untouched. Returns false when no item
    /// matched.
    pub fn toggle(&mut self, order: i64) -> bool {
        match self.items.iter_mut().find(|item| item.order == order) {
            Some(item) => {
                item.is_done = !item.is_done;
                true
            }
            None => false,
        }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Items in display order (ascending by order)
    pub fn sorted_items(&self) -> Vec<ChecklistItem> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_order(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.order)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}
