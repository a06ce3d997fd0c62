//! Preset store
//!
//! This module contains the store that owns one preset file: it loads the
//! file, edits the presets in memory and writes the whole document back.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::PRESET_FILE_NAME;
use crate::errors::{Result, persistence_error};
use crate::utils::config_dir;

use super::model::{Preset, PresetDocument};

/// Presets held in memory together with the file they belong to
///
/// Edits mark the store dirty until the next successful `save` or `reload`,
/// so callers can tell when memory and disk disagree.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
    document: PresetDocument,
    dirty: bool,
}

impl PresetStore {
    /// Default location of the preset file in the per-user config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join(PRESET_FILE_NAME))
    }

    /// Loads the preset file at `path`
    ///
    /// A missing file is not an error: the store starts with an empty document.
    ///
    /// # Errors
    /// Returns a persistence error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = read_document(&path)?;
        Ok(PresetStore {
            path,
            document,
            dirty: false,
        })
    }

    /// Reads the file again, discarding unsaved edits
    ///
    /// # Errors
    /// Returns a persistence error if the file cannot be read or parsed; the
    /// in-memory presets are left as they were.
    pub fn reload(&mut self) -> Result<()> {
        self.document = read_document(&self.path)?;
        self.dirty = false;
        Ok(())
    }

    /// Writes the whole document, creating missing parent directories
    ///
    /// # Errors
    /// Returns a persistence error naming the path if the directory or the
    /// file cannot be written. The in-memory presets are kept and the store
    /// stays dirty.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .map_err(|e| persistence_error(e, parent.to_path_buf(), "create directory"))?;
        }

        let yaml = serde_yaml::to_string(&self.document)
            .map_err(|e| persistence_error(e, self.path.clone(), "serialize presets for"))?;
        fs::write(&self.path, yaml).map_err(|e| persistence_error(e, self.path.clone(), "write"))?;

        self.dirty = false;
        debug!(
            "Saved {} preset(s) to {}",
            self.document.presets().len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &PresetDocument {
        &self.document
    }

    /// Whether in-memory edits have not reached the file yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn presets(&self) -> &[Preset] {
        self.document.presets()
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.presets().iter().map(|preset| preset.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets().iter().find(|preset| preset.name == name)
    }

    pub fn is_duplicate_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Appends a preset
    ///
    /// Duplicate names are not rejected here; check `is_duplicate_name` first
    /// and use `overwrite` for an existing name.
    pub fn add(&mut self, name: &str, find: &str, replace: &str) {
        self.document
            .presets_mut()
            .push(Preset::new(name, find, replace));
        self.dirty = true;
    }

    /// Replaces the find and replace text of the preset called `name`
    ///
    /// Returns false when there is no such preset.
    pub fn overwrite(&mut self, name: &str, find: &str, replace: &str) -> bool {
        match self
            .document
            .presets_mut()
            .iter_mut()
            .find(|preset| preset.name == name)
        {
            Some(preset) => {
                preset.find = find.to_string();
                preset.replace = replace.to_string();
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Removes the given record; returns false if it was not held
    pub fn delete(&mut self, preset: &Preset) -> bool {
        let presets = self.document.presets_mut();
        match presets.iter().position(|existing| existing == preset) {
            Some(index) => {
                presets.remove(index);
                self.dirty = true;
                info!("{} preset deleted from {}", preset.name, self.path.display());
                true
            }
            None => false,
        }
    }

    /// Orders presets by name, case-sensitively
    pub fn sort_by_name(&mut self) {
        self.document
            .presets_mut()
            .sort_by(|a, b| a.name.cmp(&b.name));
        self.dirty = true;
    }
}

fn read_document(path: &Path) -> Result<PresetDocument> {
    if !path.exists() {
        debug!("No preset file at {}, starting empty", path.display());
        return Ok(PresetDocument::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| persistence_error(e, path.to_path_buf(), "read"))?;
    serde_yaml::from_str(&content).map_err(|e| persistence_error(e, path.to_path_buf(), "parse"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = PresetStore::load(dir.path().join("absent.yaml")).unwrap();

        assert!(store.presets().is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_directory_at_preset_path_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.yaml");
        fs::create_dir(&path).unwrap();

        let err = PresetStore::load(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_overwrite_unknown_name() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::load(dir.path().join("p.yaml")).unwrap();

        assert!(!store.overwrite("nope", "a", "b"));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::load(dir.path().join("p.yaml")).unwrap();
        store.add("beta", "", "");
        store.add("Alpha", "", "");
        store.add("alpha", "", "");

        store.sort_by_name();

        assert_eq!(store.preset_names(), vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_edits_mark_dirty_until_saved() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::load(dir.path().join("nested/p.yaml")).unwrap();

        store.add("X", "a", "b");
        assert!(store.is_dirty());

        store.save().unwrap();
        assert!(!store.is_dirty());
        assert!(dir.path().join("nested/p.yaml").is_file());
    }
}
