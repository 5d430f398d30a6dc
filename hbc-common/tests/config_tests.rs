//! Integration tests for bootstrap config loading
//!
//! Tests that touch HBC_CONFIG are marked #[serial] so they do not race
//! on the process environment.

use hbc_common::config::{load_config, load_toml_config, TomlConfig, CONFIG_ENV_VAR};
use hbc_common::Error;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
model_id = "acme/heartbeat-classifier"
inference_endpoint = "http://localhost:9000"
api_token = "secret"
samples_dir = "/srv/hbc/samples"
bind_address = "0.0.0.0"
port = 8080
max_upload_bytes = 1024
request_timeout_secs = 5

[logging]
level = "debug"
"#,
    );

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.model_id.as_deref(), Some("acme/heartbeat-classifier"));
    assert_eq!(config.inference_endpoint.as_deref(), Some("http://localhost:9000"));
    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.samples_dir, Some(PathBuf::from("/srv/hbc/samples")));
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_upload_bytes, 1024);
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_config_fills_defaults() {
    let file = write_config("model_id = \"acme/model\"\n");

    let config = load_toml_config(file.path()).unwrap();
    let defaults = TomlConfig::default();
    assert_eq!(config.model_id.as_deref(), Some("acme/model"));
    assert_eq!(config.port, defaults.port);
    assert_eq!(config.bind_address, defaults.bind_address);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_config_is_config_error() {
    let file = write_config("port = \"not a number\"\n");

    let err = load_toml_config(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn test_missing_explicit_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_toml_config(&missing).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {:?}", err);
}

#[test]
#[serial]
fn test_cli_path_overrides_env_path() {
    let cli_file = write_config("port = 1111\n");
    let env_file = write_config("port = 2222\n");
    std::env::set_var(CONFIG_ENV_VAR, env_file.path());

    let config = load_config(Some(cli_file.path()), "hbc-test").unwrap();
    assert_eq!(config.port, 1111);

    std::env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_path_used_without_cli() {
    let env_file = write_config("port = 2222\n");
    std::env::set_var(CONFIG_ENV_VAR, env_file.path());

    let config = load_config(None, "hbc-test").unwrap();
    assert_eq!(config.port, 2222);

    std::env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_path_must_exist() {
    let dir = TempDir::new().unwrap();
    std::env::set_var(CONFIG_ENV_VAR, dir.path().join("missing.toml"));

    let result = load_config(None, "hbc-test");
    assert!(matches!(result, Err(Error::NotFound(_))));

    std::env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_no_file_falls_back_to_defaults() {
    std::env::remove_var(CONFIG_ENV_VAR);

    // Module name chosen so no real config file can exist for it
    let config = load_config(None, "hbc-test-nonexistent-module").unwrap();
    assert!(config.model_id.is_none());
    assert_eq!(config.port, TomlConfig::default().port);
}
