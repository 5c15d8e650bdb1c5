//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_clockwork_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, clockwork_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
name = "gemini-2.5-flash"

[server]
port = 9000
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-2.5-flash");
    assert_eq!(config.server.port, 9000);
    // Defaults preserved
    assert_eq!(config.model.max_tokens, 4096);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.session.app_name, "root_agent");
    assert!(config.agent.instruction.contains("get_current_time"));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, clockwork_common::ConfigError::ParseError(_)));
}

#[test]
fn load_parses_log_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, crate::schema::LogLevel::Debug);
    assert_eq!(config.logging.level.directive(), "clockwork=debug");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clockwork").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.agent.name, "root_agent");
    assert_eq!(config.server.port, 7860);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ClockworkConfig;

    let config: ClockworkConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.model.name, "gemini-2.0-flash");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("clockwork"));
        assert!(path_str.ends_with("config.toml"));
    }
}
