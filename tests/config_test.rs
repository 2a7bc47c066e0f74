use std::path::PathBuf;

use npmime::{MimeErrorKind, RegistryConfig};

const MIME_TYPES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mime.types");
const EXTRA_TYPES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/extra.types");

#[test]
fn test_config_from_json() {
    let json = serde_json::json!({
        "types_files": [MIME_TYPES, EXTRA_TYPES],
        "default_type": "application/x-unknown"
    });
    let config: RegistryConfig = serde_json::from_value(json).expect("Failed to parse config");

    assert_eq!(config.types_files.len(), 2);
    assert!(!config.system_types);
    assert_eq!(config.default_type.as_deref(), Some("application/x-unknown"));
}

#[test]
fn test_config_defaults_when_fields_missing() {
    let config: RegistryConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn test_build_loads_in_order() {
    let config = RegistryConfig {
        types_files: vec![PathBuf::from(MIME_TYPES), PathBuf::from(EXTRA_TYPES)],
        ..RegistryConfig::default()
    };
    let registry = config.build().unwrap();

    assert_eq!(registry.lookup("file.m4a", None), Some("audio/mp4"));
    assert_eq!(registry.lookup("map.map", None), Some("application/json"));
    // no explicit default, so `bin` decides
    assert_eq!(registry.get_default_type(), Some("application/octet-stream"));
}

#[test]
fn test_build_with_explicit_default() {
    let config = RegistryConfig {
        types_files: vec![PathBuf::from(MIME_TYPES)],
        default_type: Some("text/plain".to_string()),
        ..RegistryConfig::default()
    };
    let registry = config.build().unwrap();
    assert_eq!(registry.lookup("file.nope", None), Some("text/plain"));
}

#[test]
fn test_build_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig {
        types_files: vec![PathBuf::from(MIME_TYPES), dir.path().join("absent.types")],
        ..RegistryConfig::default()
    };
    let err = config.build().unwrap_err();
    assert_eq!(err.kind(), MimeErrorKind::NotFound);
}
