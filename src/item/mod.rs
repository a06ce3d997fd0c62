//! Item module
//!
//! This module contains the minimal view of a renameable item and the
//! ordered selection of items one rename run works on.

mod model;
mod selection;

pub use model::{ItemKind, RenameTarget};
pub use selection::Selection;
