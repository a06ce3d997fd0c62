//! Selection of items
//!
//! This module contains the ordered collection of items targeted by one run.

use log::debug;

use super::model::{ItemKind, RenameTarget};

/// Ordered collection of borrowed items
///
/// Order is significant: contextual tokens and proposed names are matched
/// to items by position.
pub struct Selection<'a> {
    items: Vec<&'a mut dyn RenameTarget>,
}

impl<'a> Selection<'a> {
    /// Creates a selection from the host's items, keeping their order
    pub fn new(items: Vec<&'a mut dyn RenameTarget>) -> Self {
        Selection { items }
    }

    /// Removes every item of the excluded kind
    ///
    /// The relative order of the remaining items is preserved. An empty
    /// result is valid and simply means there is nothing to rename.
    pub fn filter_kind(&mut self, excluded: ItemKind) {
        let before = self.items.len();
        self.items.retain(|item| item.kind() != excluded);
        debug!(
            "Removed {} {} item(s) from the selection",
            before - self.items.len(),
            excluded
        );
    }

    /// Current names in selection order
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// Kinds in selection order
    pub fn kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(|item| item.kind()).collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn RenameTarget> {
        self.items.iter().map(|item| &**item)
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut (dyn RenameTarget + 'a)> {
        self.items.iter_mut().map(|item| &mut **item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
