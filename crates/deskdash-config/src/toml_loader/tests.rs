//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_deskdash_config.toml"));
    assert!(matches!(
        result,
        Err(deskdash_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[windows]
max_visible = 1

[relay]
port = 4100
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.windows.max_visible, 1);
    assert_eq!(config.relay.port, 4100);
    // Defaults preserved
    assert_eq!(config.relay.start_port, 3002);
    assert_eq!(config.menu.len(), 6);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(deskdash_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[windows]\nmax_visible = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.windows.max_visible, 0);
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.windows.max_visible, 3);
    assert_eq!(config.logging.level, crate::schema::LogLevel::Info);
}

#[test]
fn default_template_parses_as_valid_toml() {
    let content = template::default_config_toml();
    let config: crate::schema::DeskdashConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_deskdash() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("deskdash/config.toml"));
    }
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[windows]\nmax_visible = 1\n").unwrap();

    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[windows]\nmax_visible = 1\n");
}

#[test]
fn load_or_create_seeds_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deskdash").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.windows.max_visible, 3);
    assert!(path.exists());

    let reloaded = load_or_create(&path).unwrap();
    assert_eq!(reloaded.relay.port_file, config.relay.port_file);
}
