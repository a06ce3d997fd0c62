//! Host module
//!
//! This module contains the concrete items the command-line tool renames:
//! entries of a directory, or items listed in a YAML manifest.

mod filesystem;
mod manifest;

pub use filesystem::{FsItem, scan_directory};
pub use manifest::{Manifest, ManifestItem};
