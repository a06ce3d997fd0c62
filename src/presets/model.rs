//! Preset data structures
//!
//! The preset file nests the records under the script identity and version:
//!
//! ```yaml
//! settings:
//!   script_name:
//!     title: Find and Replace in Name Advance
//!     version:
//!       number: 0.1.0
//!       presets:
//!         - name: Version Up
//!           find: v1
//!           replace: v2
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{TITLE, VERSION};

/// A named (find, replace) pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub find: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub replace: String,
}

impl Preset {
    pub fn new(name: &str, find: &str, replace: &str) -> Self {
        Preset {
            name: name.to_string(),
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

/// Root of the preset file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PresetDocument {
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub script_name: ScriptName,
}

/// Script identity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScriptName {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub version: ScriptVersion,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScriptVersion {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub number: String,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub presets: Vec<Preset>,
}

impl Default for PresetDocument {
    /// An empty document stamped with this tool's title and version
    fn default() -> Self {
        PresetDocument {
            settings: Settings {
                script_name: ScriptName {
                    title: TITLE.to_string(),
                    version: ScriptVersion {
                        number: VERSION.to_string(),
                        presets: Vec::new(),
                    },
                },
            },
        }
    }
}

impl PresetDocument {
    pub fn presets(&self) -> &[Preset] {
        &self.settings.script_name.version.presets
    }

    pub fn presets_mut(&mut self) -> &mut Vec<Preset> {
        &mut self.settings.script_name.version.presets
    }
}

/// Reads a missing or null text field as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an empty `presets:` container as no presets
fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<Preset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Preset>>::deserialize(deserializer)?.unwrap_or_default())
}
