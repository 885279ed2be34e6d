//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uni_registry::config::{Config, ConfigOverrides};

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.server.host.is_empty(),
        "Default server host should not be empty"
    );
    assert_ne!(config.server.port, 0, "Default server port should be set");
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[server]
host = "0.0.0.0"
port = 4000
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 4000);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[server]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.server.host, "127.0.0.1"); // Serde default
    assert_eq!(config.server.port, 3000); // Serde default
}

#[test]
fn test_config_missing_server_section() {
    let toml_str = r#"
[logging]
level = "info"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$UNI_REGISTRY/test.log"

[server]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("uniregistry"));
    assert!(!config.logging.file.contains("$UNI_REGISTRY"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("port", "8080").expect("Failed to set port");
    assert_eq!(config.server.port, 8080);

    // Test unknown key and malformed values
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("port", "not-a-port").is_err());
    assert!(config.set("verbose", "maybe").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("port", "9999").expect("Failed to set port");
    assert_eq!(config.server.port, 9999);

    // Unset should restore default
    config
        .unset("port", &defaults)
        .expect("Failed to unset port");
    assert_eq!(config.server.port, defaults.server.port);
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        host: Some("0.0.0.0".to_string()),
        port: Some(4000),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 4000);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let default_port = config.server.port;

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: None,
        verbose: None,
        host: None,
        port: None,
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.server.port, default_port);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[server]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("file"));
    assert!(display_str.contains("verbose"));
    assert!(display_str.contains("host"));
    assert!(display_str.contains("port"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.logging.file, defaults.logging.file);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[server]
host = "10.0.0.1"
port = 7000
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.server.host, "10.0.0.1");
    assert_eq!(config.server.port, 7000);
}

#[test]
fn test_get_uniregistry_dir() {
    let dir = Config::get_uniregistry_dir();

    // Should contain "uniregistry" in the path
    assert!(dir.to_string_lossy().contains("uniregistry"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
