//! Tests for config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: pix-models
  env: development
"#
    .to_string()
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ==================== YAML field loading tests ====================

#[test]
fn test_load_app_fields() {
    let yaml = r#"
app:
  name: payments
  env: production
  log_level: debug
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.name, "payments");
    assert_eq!(cfg.app.env, "production");
    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
    assert!(cfg.codec.is_none());
}

#[test]
fn test_load_codec_fields() {
    let yaml = r#"
app:
  name: payments
  env: staging

codec:
  unknown_fields: reject
  pretty: true
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    let codec = cfg.codec.as_ref().unwrap();
    assert_eq!(codec.unknown_fields, UnknownFields::Reject);
    assert!(codec.pretty);
}

#[test]
fn test_codec_defaults_when_fields_missing() {
    let yaml = r#"
app:
  name: payments
  env: staging

codec: {}
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    let codec = cfg.codec_config();
    assert_eq!(codec.unknown_fields, UnknownFields::Preserve);
    assert!(!codec.pretty);
}

#[test]
fn test_codec_defaults_when_section_missing() {
    let cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.codec_config().unknown_fields, UnknownFields::Preserve);
}

#[test]
fn test_unknown_fields_policies() {
    for (text, expected) in [
        ("preserve", UnknownFields::Preserve),
        ("discard", UnknownFields::Discard),
        ("reject", UnknownFields::Reject),
    ] {
        let yaml = format!(
            "app:\n  name: x\n  env: development\ncodec:\n  unknown_fields: {}\n",
            text
        );
        let cfg = Config::from_yaml(&yaml).unwrap();
        assert_eq!(cfg.codec_config().unknown_fields, expected);
    }
}

#[test]
fn test_invalid_unknown_fields_policy() {
    let yaml = r#"
app:
  name: x
  env: development
codec:
  unknown_fields: ignore
"#;
    let result = Config::from_yaml(yaml);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_app_section() {
    let result = Config::from_yaml("codec:\n  pretty: true\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ==================== Validation tests ====================

#[test]
fn test_validate_minimal() {
    let cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_empty_name() {
    let yaml = r#"
app:
  name: "  "
  env: development
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("app.name is required"));
}

#[test]
fn test_validate_unknown_env() {
    let yaml = r#"
app:
  name: payments
  env: qa
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("app.env must be one of"));
}

#[test]
fn test_override_log_level() {
    let mut cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();

    cfg.override_log_level(" DEBUG ".to_string());
    assert_eq!(cfg.app.log_level, Some("debug".to_string()));

    cfg.override_log_level("".to_string());
    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let file = write_temp(&minimal_valid_yaml());

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.app.name, "pix-models");
    assert_eq!(cfg.app.env, "development");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load("/nonexistent/pix-models/config.yaml");

    match result {
        Err(ConfigError::ReadFile { path, .. }) => {
            assert_eq!(path, "/nonexistent/pix-models/config.yaml")
        }
        other => panic!("expected ReadFile error, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_yaml() {
    let file = write_temp("app: [unclosed");

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_runs_validation() {
    let file = write_temp("app:\n  name: payments\n  env: local\n");

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

// ==================== Log level tests ====================

fn app_with_level(level: Option<&str>) -> AppConfig {
    AppConfig {
        name: "pix-models".to_string(),
        env: "development".to_string(),
        log_level: level.map(str::to_string),
    }
}

#[test]
fn test_tracing_level_known_values() {
    assert_eq!(app_with_level(Some("debug")).tracing_level(), tracing::Level::DEBUG);
    assert_eq!(app_with_level(Some("ERROR")).tracing_level(), tracing::Level::ERROR);
    assert_eq!(app_with_level(Some("warning")).tracing_level(), tracing::Level::WARN);
}

#[test]
fn test_tracing_level_defaults_to_info() {
    assert_eq!(app_with_level(None).tracing_level(), tracing::Level::INFO);
    assert_eq!(app_with_level(Some("loud")).tracing_level(), tracing::Level::INFO);
}
