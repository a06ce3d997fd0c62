use std::fs;
use tempfile::tempdir;

use namesmith::config::{AppConfig, load_config, read_or_default};
use namesmith::pattern::WildcardMode;

// Helper function to create a test configuration file and parse it
fn parse_test_config(config_content: &str) -> anyhow::Result<AppConfig> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("test_config.yaml");

    fs::write(&config_path, config_content)?;

    load_config(config_path)
}

#[test]
fn test_valid_configuration() {
    let valid_config = r#"
presets_file: "/tmp/presets.yaml"
wildcard_mode: any_sequence
project: feature
user: kieran
"#;

    let config = parse_test_config(valid_config).expect("configuration should be valid");

    assert_eq!(config.wildcard_mode, WildcardMode::AnySequence);
    assert_eq!(config.project.as_deref(), Some("feature"));
}

#[test]
fn test_empty_configuration_is_default() {
    let config = parse_test_config("   \n").unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.wildcard_mode, WildcardMode::Legacy);
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = parse_test_config("wildcards: legacy\n");

    assert!(result.is_err(), "Unknown fields should fail to parse");
}

#[test]
fn test_unknown_wildcard_mode_is_rejected() {
    let result = parse_test_config("wildcard_mode: greedy\n");

    assert!(result.is_err());
}

#[test]
fn test_blank_project_is_rejected() {
    let result = parse_test_config("project: \"\"\n");

    let error = result.unwrap_err().to_string();
    assert!(error.contains("project"), "Error should name the field: {error}");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = tempdir().unwrap();

    let result = read_or_default(Some(temp_dir.path().join("absent.yaml")));

    assert!(result.is_err());
}

#[test]
fn test_presets_path_uses_configured_file() {
    let temp_dir = tempdir().unwrap();
    let presets = temp_dir.path().join("mine.yaml");
    let config = AppConfig {
        presets_file: Some(presets.to_string_lossy().to_string()),
        ..AppConfig::default()
    };

    assert_eq!(config.presets_path().unwrap(), presets);
}
