//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::pattern::WildcardMode;
use crate::presets::PresetStore;

/// Configuration for namesmith
///
/// Every field is optional; an absent configuration file means all defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Location of the preset file; `~` and environment variables are expanded
    #[serde(default)]
    pub presets_file: Option<String>,
    /// How `*` in find strings is compiled
    #[serde(default)]
    pub wildcard_mode: WildcardMode,
    /// Project name for the `<project>` token
    #[serde(default)]
    pub project: Option<String>,
    /// User name for the `<user>` token
    #[serde(default)]
    pub user: Option<String>,
}

impl AppConfig {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error naming the field when a given value is blank.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("presets_file", &self.presets_file),
            ("project", &self.project),
            ("user", &self.user),
        ];
        for (field, value) in fields {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(anyhow!(
                    "Configuration field '{field}' is empty. Remove it or give it a value."
                ));
            }
        }
        Ok(())
    }

    /// Path of the preset file, expanded
    ///
    /// Falls back to the per-user configuration directory.
    ///
    /// # Errors
    /// Returns an error if an environment variable in the path is not set or
    /// the configuration directory cannot be determined.
    pub fn presets_path(&self) -> Result<PathBuf> {
        match &self.presets_file {
            Some(path) => {
                let expanded = shellexpand::full(path)
                    .map_err(|e| anyhow!("Failed to expand presets_file '{path}': {e}"))?;
                Ok(PathBuf::from(expanded.as_ref()))
            }
            None => Ok(PresetStore::default_path()?),
        }
    }
}
