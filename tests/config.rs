//! Tests for configuration loading.

use std::fs;
use tasklog::{Config, Error, Level};
use tempfile::TempDir;

#[test]
fn missing_file_uses_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert!(config.diagnostics.enabled);
    assert_eq!(config.parse_level(), Level::Warn);
    assert!(!config.general.home.is_empty());
}

#[test]
fn empty_file_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.diagnostics.level, "warn");
    assert!(config.diagnostics.colors);
}

#[test]
fn load_from_reads_sections() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("tasklog.toml");
    fs::write(
        &path,
        r#"
[general]
home = "/data/tasks"

[diagnostics]
enabled = false
level = "debug"
colors = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.general.home, "/data/tasks");
    assert!(!config.diagnostics.enabled);
    assert!(!config.diagnostics.colors);
    assert_eq!(config.parse_level(), Level::Debug);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = Config::parse("[general\nhome = 1").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn unknown_level_falls_back_to_warn() {
    let config = Config::parse("[diagnostics]\nlevel = \"loud\"").unwrap();
    assert_eq!(config.parse_level(), Level::Warn);
}

#[test]
fn home_dir_expands_tilde() {
    let config = Config::parse("[general]\nhome = \"~/tasks\"").unwrap();
    let home = config.home_dir().unwrap();
    assert!(!home.starts_with("~"));
    assert!(home.ends_with("tasks"));
}

#[test]
fn home_dir_rejects_empty() {
    let config = Config::parse("[general]\nhome = \"  \"").unwrap();
    assert!(matches!(config.home_dir(), Err(Error::InvalidPath(_))));
}

#[test]
fn home_dir_rejects_unset_variable() {
    let config =
        Config::parse("[general]\nhome = \"$TASKLOG_SURELY_UNSET_VARIABLE/x\"").unwrap();
    assert!(matches!(config.home_dir(), Err(Error::InvalidPath(_))));
}
