//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use gradia_common::{ConfigError, GradientType};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_gradia_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[gradient]
type = "radial"
direction = "center"

[[stops]]
position = 10
color = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gradient.gradient_type, GradientType::Radial);
    assert_eq!(config.gradient.direction, "center");
    assert_eq!(config.stops.len(), 1);
    assert_eq!(config.stops[0].position, 10.0);
    // Defaults preserved
    assert_eq!(config.track.min, 0.0);
    assert_eq!(config.track.max, 100.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_it_anyway() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[track]
min = 90
max = 10
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.track.min, 90.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradia").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gradient.direction, "90deg");
    assert!(config.stops.is_empty());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::GradiaConfig;

    let content = default_config_toml();
    let config: GradiaConfig = toml::from_str(&content).unwrap();
    assert_eq!(config, GradiaConfig::default());
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config directory.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("gradia"));
        assert!(path_str.ends_with("config.toml"));
    }
}
