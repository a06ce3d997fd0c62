//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{default_config_path, load_config, read_or_default};
pub use model::AppConfig;
