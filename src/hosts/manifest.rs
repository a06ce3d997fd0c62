//! Manifest items
//!
//! A manifest is a YAML list of named items with a kind and an optional
//! context value, for renaming things that do not live on disk:
//!
//! ```yaml
//! items:
//!   - name: sh010_comp_v1
//!     kind: segment
//!     context: sh010
//!   - name: dissolve
//!     kind: transition
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, mutation_error, persistence_error};
use crate::item::{ItemKind, RenameTarget};

/// One item in a manifest
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestItem {
    pub name: String,
    pub kind: ItemKind,
    /// Colour space or shot name, depending on where the item lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Locked items refuse to be renamed
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl ManifestItem {
    pub fn new(name: &str, kind: ItemKind) -> Self {
        ManifestItem {
            name: name.to_string(),
            kind,
            context: None,
            locked: false,
        }
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string());
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

impl RenameTarget for ManifestItem {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: &str) -> Result<()> {
        if self.locked {
            return Err(mutation_error(&self.name, "item is locked"));
        }
        self.name = name.to_string();
        Ok(())
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn context_value(&self) -> Result<Option<String>> {
        Ok(self.context.clone())
    }
}

/// A YAML document listing items
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    pub items: Vec<ManifestItem>,
}

impl Manifest {
    /// Reads a manifest file
    ///
    /// # Errors
    /// Returns a persistence error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| persistence_error(e, path.to_path_buf(), "read"))?;
        serde_yaml::from_str(&content).map_err(|e| persistence_error(e, path.to_path_buf(), "parse"))
    }

    /// Writes the manifest back
    ///
    /// # Errors
    /// Returns a persistence error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| persistence_error(e, path.to_path_buf(), "serialize manifest for"))?;
        fs::write(path, yaml).map_err(|e| persistence_error(e, path.to_path_buf(), "write"))
    }

    pub fn kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(|item| item.kind).collect()
    }
}
