//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::from_str;

use crate::constants::DEFAULT_CONFIG_PATH;
use crate::utils::config_dir;

use super::model::AppConfig;

/// Loads a configuration from a file
///
/// An empty file is the default configuration.
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<AppConfig> {
    let file_content = fs::read(&file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    if content_str.trim().is_empty() {
        debug!("Configuration file {} is empty", file.display());
        return Ok(AppConfig::default());
    }

    let config: AppConfig = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    config.validate()?;

    Ok(config)
}

/// Default location of the configuration file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(DEFAULT_CONFIG_PATH))
}

/// Reads the given configuration file, or the default one if present
///
/// An explicitly given file must exist. Without one, the per-user
/// configuration file is used when it exists and defaults apply otherwise.
///
/// # Errors
/// Returns an error if an explicit file is missing or any file is invalid
pub fn read_or_default(config: Option<PathBuf>) -> Result<AppConfig> {
    match config {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!(
                    "Configuration file {} does not exist",
                    path.display()
                ));
            }
            load_config(path)
        }
        None => {
            let path = default_config_path()?;
            if path.is_file() {
                debug!("Using configuration file {}", path.display());
                load_config(path)
            } else {
                debug!("No configuration file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}
