//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("mps-site").to_string_lossy().to_string())
        .unwrap_or_else(|| "./mps_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Store settings for [`ContentStore::open`](crate::storage::ContentStore::open)
    pub fn to_store_config(&self) -> crate::storage::StorageConfig {
        crate::storage::StorageConfig::new(&self.data_dir)
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Settings for the HTTP layer
    pub fn to_api_config(&self) -> crate::api::ApiConfig {
        crate::api::ApiConfig {
            host: self.host.clone(),
            port: self.port,
            request_timeout_ms: self.request_timeout_secs * 1000,
        }
    }
}

/// Lead notification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Post notifications to `endpoint`; otherwise they are only logged
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub endpoint: String,

    #[serde(default = "default_notify_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_notify_retries")]
    pub max_retries: u32,
}

fn default_notify_timeout() -> u64 {
    5000
}

fn default_notify_retries() -> u32 {
    2
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            request_timeout_ms: default_notify_timeout(),
            max_retries: default_notify_retries(),
        }
    }
}

impl NotifyConfig {
    /// Build the configured sink, falling back to the log sink
    pub fn build_sink(&self) -> std::sync::Arc<dyn crate::notify::NotificationSink> {
        use crate::notify::{LogSink, WebhookConfig, WebhookSink};

        if !self.enabled {
            return std::sync::Arc::new(LogSink);
        }

        let config = WebhookConfig {
            endpoint: self.endpoint.clone(),
            request_timeout_ms: self.request_timeout_ms,
            max_retries: self.max_retries,
        };
        match WebhookSink::new(config) {
            Ok(sink) => std::sync::Arc::new(sink),
            Err(e) => {
                tracing::warn!("Webhook notifications disabled: {}", e);
                std::sync::Arc::new(LogSink)
            }
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mps-site").join("config.toml")),
            Some(PathBuf::from("/etc/mps-site/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("MPS_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(host) = var("MPS_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("MPS_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Some(endpoint) = var("MPS_NOTIFY_ENDPOINT") {
            self.notify.endpoint = endpoint;
            self.notify.enabled = true;
        }
        if let Some(enabled) = var("MPS_NOTIFY_ENABLED") {
            self.notify.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        if let Some(level) = var("MPS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MPS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# MPS Site Configuration
#
# Environment variables override these settings:
# - MPS_DATA_DIR
# - MPS_API_HOST
# - MPS_API_PORT
# - MPS_NOTIFY_ENDPOINT
# - MPS_NOTIFY_ENABLED
# - MPS_LOG_LEVEL
# - MPS_LOG_FORMAT

[storage]
# Directory holding the content store (one JSON file per key)
data_dir = "./mps_data"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Request timeout in seconds
request_timeout_secs = 30

[notify]
# POST new leads to the endpoint below; when disabled they are only logged
enabled = false

# Form-handling endpoint receiving lead notifications
endpoint = ""

# Request timeout (ms) and attempts per notification
request_timeout_ms = 5000
max_retries = 2

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
