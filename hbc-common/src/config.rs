//! Bootstrap configuration loading and config file discovery
//!
//! Config file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. `HBC_CONFIG` environment variable
//! 3. `<platform config dir>/hbc/<module>.toml`
//! 4. Built-in defaults (no file)
//!
//! An explicitly named file (1 or 2) must exist. The platform default is
//! optional.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HBC_CONFIG";

/// Default hosted inference endpoint
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Default HTTP port for hbc-ai
pub const DEFAULT_PORT: u16 = 5730;

/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default upload cap (25 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Default inference request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Bootstrap configuration loaded from TOML file
///
/// Read once at start-up. Every field is optional in the file; missing
/// fields fall back to the built-in defaults above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Identifier of the pre-trained model to query
    #[serde(default)]
    pub model_id: Option<String>,

    /// Base URL of the inference service
    #[serde(default)]
    pub inference_endpoint: Option<String>,

    /// Bearer token for the inference service
    #[serde(default)]
    pub api_token: Option<String>,

    /// Directory holding the bundled sample recordings
    #[serde(default)]
    pub samples_dir: Option<PathBuf>,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            model_id: None,
            inference_endpoint: None,
            api_token: None,
            samples_dir: None,
            bind_address: default_bind_address(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Platform default config file path for a module
///
/// e.g. `~/.config/hbc/hbc-ai.toml` on Linux
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hbc").join(format!("{}.toml", module_name)))
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Resolve and load the bootstrap configuration for a module
///
/// See module docs for the resolution order.
pub fn load_config(cli_arg: Option<&Path>, module_name: &str) -> Result<TomlConfig> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return load_toml_config(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return load_toml_config(Path::new(&path));
        }
    }

    // Priority 3: Platform config directory
    if let Some(path) = default_config_path(module_name) {
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_toml_config(&path);
        }
        debug!("No config file at {}", path.display());
    }

    // Priority 4: Built-in defaults
    Ok(TomlConfig::default())
}
