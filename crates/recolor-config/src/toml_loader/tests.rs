//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use recolor_common::{ConfigError, TargetFormat};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_recolor_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[convert]
target_format = "hex"
use_opacity = false
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.convert.target_format, TargetFormat::Hex);
    assert!(!config.convert.use_opacity);
    // Defaults preserved
    assert_eq!(config.convert.precision, 2);
    assert_eq!(config.report.max_errors_shown, 80);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[convert]
precision = 12
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.convert.precision, 12);
    assert_eq!(config.convert.to_options().precision, 6);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recolor").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::schema::RecolorConfig::default());
}

#[test]
fn create_default_config_keeps_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[convert]\nprecision = 4\n").unwrap();

    create_default_config(&path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[convert]\nprecision = 4\n"
    );
    assert_eq!(load_from_path(&path).unwrap().convert.precision, 4);
}

#[test]
fn load_from_directory_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::RecolorConfig;

    let content = default_config_toml();
    let config: RecolorConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.convert.target_format, TargetFormat::Oklch);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("recolor"));
        assert!(path_str.ends_with("config.toml"));
    }
}
