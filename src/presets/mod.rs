//! Preset module
//!
//! This module contains the persisted (find, replace) presets and the store
//! that loads, edits and saves them.

mod model;
mod store;

pub use model::{Preset, PresetDocument, ScriptName, ScriptVersion, Settings};
pub use store::PresetStore;
