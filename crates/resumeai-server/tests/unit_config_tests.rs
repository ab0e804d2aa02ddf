//! Unit tests for ServerConfig and LlmProviderConfig loading

use resumeai_server::config::{LlmProviderConfig, ServerConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.port, 5000);
    assert_eq!(config.recent_activity_limit, 5);
    assert_eq!(config.min_output_chars, 50);
    assert_eq!(config.llm.provider_name(), "gemini");
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.toml",
        r#"
host = "0.0.0.0"
port = 8080
log_level = "debug"
recent_activity_limit = 10
min_output_chars = 20

[llm]
type = "mock"
response = "Canned resume"
model = "mock-model"
"#,
    );

    let config = ServerConfig::load_from(&path).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.recent_activity_limit, 10);
    assert_eq!(config.min_output_chars, 20);
    match config.llm {
        LlmProviderConfig::Mock { response, model } => {
            assert_eq!(response, "Canned resume");
            assert_eq!(model, "mock-model");
        }
        other => panic!("Expected mock provider, got {:?}", other),
    }
}

#[test]
fn test_load_from_partial_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.json",
        r#"{"port": 9000, "llm": {"type": "gemini", "model": "gemini-1.5-flash", "timeout_secs": 15}}"#,
    );

    let config = ServerConfig::load_from(&path).unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.recent_activity_limit, 5);
    assert_eq!(config.llm.model(), "gemini-1.5-flash");
    match config.llm {
        LlmProviderConfig::Gemini {
            timeout_secs,
            base_url,
            ..
        } => {
            assert_eq!(timeout_secs, 15);
            assert!(base_url.is_none());
        }
        other => panic!("Expected Gemini provider, got {:?}", other),
    }
}

#[test]
fn test_unknown_provider_type_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.toml",
        r#"
[llm]
type = "openai"
"#,
    );

    assert!(ServerConfig::load_from(&path).is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server.toml", "port = \"not closed\n[llm\n");

    let err = ServerConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load config"));
}

#[test]
fn test_loaded_config_debug_hides_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.toml",
        r#"
[llm]
type = "gemini"
api_key = "AIzaFROMFILE42"
"#,
    );

    let config = ServerConfig::load_from(&path).unwrap();
    assert!(matches!(
        config.llm,
        LlmProviderConfig::Gemini { api_key: Some(ref key), .. } if key == "AIzaFROMFILE42"
    ));
    assert!(!format!("{:?}", config).contains("AIzaFROMFILE42"));
}

#[test]
fn test_server_config_serialization_hides_key() {
    let config = ServerConfig {
        llm: LlmProviderConfig::Gemini {
            api_key: Some("super-secret".to_string()),
            model: "gemini-pro".to_string(),
            base_url: None,
            timeout_secs: 60,
        },
        ..Default::default()
    };

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["llm"]["type"], "gemini");
    assert_eq!(json["port"], 5000);
    assert!(!json.to_string().contains("super-secret"));
}
