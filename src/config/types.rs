use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Movie lookup API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the lookup endpoint (e.g., "http://www.omdbapi.com/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as the `apikey` query parameter.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick rate in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path prefix. Logging is disabled when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `tracing` filter directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
