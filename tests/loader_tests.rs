//! Integration tests for loading property files and resolving them into a
//! configuration.

use bridge_config::config::{BridgeConfig, PropertiesLoader};
use bridge_config::error::{ConfigError, LoadError};
use chrono::Duration;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_yaml_files_resolve_into_config() {
    let temp = TempDir::new().unwrap();
    let resources = temp.path().join("resources");
    fs::create_dir(&resources).unwrap();

    let shared = temp.path().join("shared.yaml");
    fs::write(
        &shared,
        format!(
            "BridgeResourceFolder: '{}'\nBridgeHost: ci-bridge\nBridgePort: 45000\nUseFiddlerUrl: true\n",
            resources.display()
        ),
    )
    .unwrap();

    let local = temp.path().join("local.yaml");
    fs::write(
        &local,
        "BridgePort: 46000\nBridgeMaxIdleTimeSpan: '02:00:00'\nFutureSetting: ignored\n",
    )
    .unwrap();

    let overrides = PropertiesLoader::new()
        .with_file(&shared)
        .with_optional_file(temp.path().join("missing.yaml"))
        .with_file(&local)
        .load()
        .unwrap();
    let config = BridgeConfig::from_properties(&overrides).unwrap();

    assert_eq!(
        config.resource_folder(),
        Some(fs::canonicalize(&resources).unwrap().as_path())
    );
    assert_eq!(config.host(), "ci-bridge");
    assert_eq!(config.port(), 46000);
    assert_eq!(config.http_port(), 8081);
    assert_eq!(config.max_idle_duration(), Duration::hours(2));
    assert!(config.use_fiddler_url());
}

#[test]
fn test_malformed_yaml_is_a_load_error() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.yaml");
    fs::write(&broken, "BridgePort: [unclosed\n").unwrap();

    let err = PropertiesLoader::new().with_file(&broken).load().unwrap_err();
    assert!(matches!(err, LoadError::Yaml { .. }));
}

#[test]
fn test_loaded_values_are_still_validated() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bridge.yaml");
    fs::write(&file, "BridgeWebSocketPort: 80.5\n").unwrap();

    let overrides = PropertiesLoader::new().with_file(&file).load().unwrap();
    let err = BridgeConfig::from_properties(&overrides).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidInteger {
            field: "BridgeWebSocketPort",
            value: "80.5".to_string(),
        }
    );
}
