//! Item data structures
//!
//! This module contains the kind tag and the trait hosts implement for
//! every item they hand to a rename run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Category of a renameable item
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Workspace,
    Library,
    Desktop,
    ReelGroup,
    Reel,
    Folder,
    Sequence,
    Clip,
    Segment,
    Transition,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Workspace => "workspace",
            ItemKind::Library => "library",
            ItemKind::Desktop => "desktop",
            ItemKind::ReelGroup => "reel group",
            ItemKind::Reel => "reel",
            ItemKind::Folder => "folder",
            ItemKind::Sequence => "sequence",
            ItemKind::Clip => "clip",
            ItemKind::Segment => "segment",
            ItemKind::Transition => "transition",
        };
        write!(f, "{label}")
    }
}

/// Read/write view of one item owned by the host
///
/// The engine only borrows items for the length of one run and never
/// renames them before the run is confirmed.
pub trait RenameTarget {
    /// The item's current name
    fn name(&self) -> String;

    /// Give the item a new name
    ///
    /// # Errors
    /// Hosts return a mutation error when they refuse the new name.
    fn set_name(&mut self, name: &str) -> Result<()>;

    /// The item's category
    fn kind(&self) -> ItemKind;

    /// Kind-specific attribute used for contextual tokens (colour space, shot name, ...)
    ///
    /// # Errors
    /// A failed lookup is not fatal; the token resolver turns it into an empty value.
    fn context_value(&self) -> Result<Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_serde_names() {
        let kind: ItemKind = serde_yaml::from_str("reel_group").unwrap();
        assert_eq!(kind, ItemKind::ReelGroup);

        let text = serde_yaml::to_string(&ItemKind::Transition).unwrap();
        assert_eq!(text.trim(), "transition");
    }

    #[test]
    fn test_item_kind_display() {
        assert_eq!(ItemKind::ReelGroup.to_string(), "reel group");
        assert_eq!(ItemKind::Clip.to_string(), "clip");
    }
}
