//! Configuration resolution for hbc-ai
//!
//! Each setting is resolved with CLI → ENV → TOML → default priority.
//! The model identifier has no default and must come from one of the
//! first three sources.

use hbc_common::config::{TomlConfig, DEFAULT_INFERENCE_ENDPOINT};
use hbc_common::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::services::InferenceSettings;

pub const MODEL_ID_ENV: &str = "HBC_MODEL_ID";
pub const INFERENCE_ENDPOINT_ENV: &str = "HBC_INFERENCE_ENDPOINT";
pub const API_TOKEN_ENV: &str = "HBC_API_TOKEN";
pub const SAMPLES_DIR_ENV: &str = "HBC_SAMPLES_DIR";
pub const PORT_ENV: &str = "HBC_PORT";

/// Samples directory used when nothing else is configured
pub const DEFAULT_SAMPLES_DIR: &str = "samples";

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model_id: Option<String>,
    pub inference_endpoint: Option<String>,
    pub samples_dir: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub model_id: String,
    pub inference_endpoint: String,
    pub api_token: Option<String>,
    pub samples_dir: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

impl ServiceConfig {
    pub fn resolve(cli: &CliOverrides, toml_config: &TomlConfig) -> Result<Self> {
        let model_id = resolve_model_id(cli.model_id.as_deref(), toml_config)?;

        let inference_endpoint = first_valid([
            cli.inference_endpoint.clone(),
            env_value(INFERENCE_ENDPOINT_ENV),
            toml_config.inference_endpoint.clone(),
        ])
        .unwrap_or_else(|| DEFAULT_INFERENCE_ENDPOINT.to_string());

        let api_token = first_valid([env_value(API_TOKEN_ENV), toml_config.api_token.clone()]);

        let samples_dir = cli
            .samples_dir
            .clone()
            .or_else(|| env_value(SAMPLES_DIR_ENV).map(PathBuf::from))
            .or_else(|| toml_config.samples_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLES_DIR));

        let port = match cli.port {
            Some(port) => port,
            None => match env_value(PORT_ENV) {
                Some(value) => value.trim().parse::<u16>().map_err(|e| {
                    Error::InvalidInput(format!("{}='{}': {}", PORT_ENV, value, e))
                })?,
                None => toml_config.port,
            },
        };

        let bind_address = cli
            .bind_address
            .clone()
            .unwrap_or_else(|| toml_config.bind_address.clone());

        if toml_config.max_upload_bytes == 0 {
            return Err(Error::Config("max_upload_bytes must be greater than 0".to_string()));
        }
        if toml_config.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            model_id,
            inference_endpoint,
            api_token,
            samples_dir,
            bind_address,
            port,
            max_upload_bytes: toml_config.max_upload_bytes,
            request_timeout: Duration::from_secs(toml_config.request_timeout_secs),
        })
    }

    pub fn inference_settings(&self) -> InferenceSettings {
        InferenceSettings {
            endpoint: self.inference_endpoint.clone(),
            model_id: self.model_id.clone(),
            api_token: self.api_token.clone(),
            timeout: self.request_timeout,
        }
    }

    /// `host:port` to bind the HTTP listener to
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Resolve the model identifier
///
/// **Priority:** CLI → ENV → TOML
pub fn resolve_model_id(cli_value: Option<&str>, toml_config: &TomlConfig) -> Result<String> {
    let candidates = [
        ("command line", cli_value.map(str::to_string)),
        ("environment", env_value(MODEL_ID_ENV)),
        ("TOML", toml_config.model_id.clone()),
    ];

    let sources: Vec<&str> = candidates
        .iter()
        .filter(|(_, v)| v.as_deref().map(is_valid_value).unwrap_or(false))
        .map(|(source, _)| *source)
        .collect();

    // Warn if multiple sources (potential misconfiguration)
    if sources.len() > 1 {
        warn!(
            "Model id found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    for (source, value) in candidates {
        if let Some(value) = value {
            if is_valid_value(&value) {
                info!("Model id '{}' loaded from {}", value.trim(), source);
                return Ok(value.trim().to_string());
            }
        }
    }

    Err(Error::Config(format!(
        "Model id not configured. Please configure using one of:\n\
         1. Command line: --model-id owner/model\n\
         2. Environment: {}=owner/model\n\
         3. TOML config: ~/.config/hbc/hbc-ai.toml (model_id = \"owner/model\")",
        MODEL_ID_ENV
    )))
}

/// Non-empty, non-whitespace
pub fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty()
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn first_valid<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|v| is_valid_value(v))
        .map(|v| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_value() {
        assert!(is_valid_value("acme/model"));
        assert!(!is_valid_value(""));
        assert!(!is_valid_value("   "));
    }

    #[test]
    fn test_first_valid_skips_blank() {
        let value = first_valid([None, Some("  ".to_string()), Some(" b ".to_string())]);
        assert_eq!(value.as_deref(), Some("b"));
        assert_eq!(first_valid::<2>([None, None]), None);
    }
}
