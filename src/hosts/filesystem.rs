//! Filesystem items
//!
//! Files are treated as clips and directories as folders. Renaming moves the
//! entry to the new name inside the same parent directory.

use std::fs::{self, read_dir};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, generic_error, mutation_error, persistence_error};
use crate::item::{ItemKind, RenameTarget};
use crate::utils::is_hidden_file;

/// A file or directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsItem {
    path: PathBuf,
    kind: ItemKind,
}

impl FsItem {
    /// Creates an item for an existing path
    ///
    /// # Errors
    /// Returns an error if the path has no file name or the name is not valid Unicode.
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| {
                generic_error(&format!("Failed to get name from path: {}", path.display()))
            })?
            .to_str()
            .ok_or_else(|| generic_error(&format!("Invalid name: {}", path.display())))?;
        debug!("Selected {name}");

        let kind = if path.is_dir() {
            ItemKind::Folder
        } else {
            ItemKind::Clip
        };
        Ok(FsItem { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenameTarget for FsItem {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn set_name(&mut self, name: &str) -> Result<()> {
        let current = self.name();
        if name.is_empty() {
            return Err(mutation_error(&current, "the new name is empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(mutation_error(&current, "the new name contains a path separator"));
        }

        let target = self.path.with_file_name(name);
        // A case-only change may name this very entry on case-insensitive filesystems
        if target.exists() && !same_entry(&self.path, &target) {
            return Err(mutation_error(
                &current,
                &format!("{} already exists", target.display()),
            ));
        }

        fs::rename(&self.path, &target).map_err(|e| mutation_error(&current, &e.to_string()))?;
        debug!("Moved {} -> {}", self.path.display(), target.display());
        self.path = target;
        Ok(())
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn context_value(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Whether two existing paths name the same entry on disk
#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Lists the visible entries of a directory, sorted by name
///
/// # Errors
/// Returns a persistence error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<FsItem>> {
    debug!("Scanning directory: {}", directory.display());

    let mut paths: Vec<PathBuf> = read_dir(directory)
        .map_err(|e| persistence_error(e, directory.to_path_buf(), "read directory"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .collect();
    paths.sort();

    let items: Vec<FsItem> = paths
        .into_iter()
        .filter_map(|path| FsItem::new(path).ok())
        .collect();
    debug!("Found {} entries in directory", items.len());

    Ok(items)
}
