//! Configuration types for coin-tape

use crate::telemetry::LogFormat;
use crate::ticker::{TickerClientConfig, BINANCE_API_URL};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Ticker price source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TickerConfig {
    /// REST API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Symbols requested on every run
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    BINANCE_API_URL.to_string()
}
fn default_symbols() -> Vec<String> {
    ["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_timeout_secs() -> u64 {
    20
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            symbols: default_symbols(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TickerConfig {
    /// Client settings derived from this section
    pub fn client_config(&self) -> TickerClientConfig {
        TickerClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Price table storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// DuckDB database file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// DuckDB extensions installed after schema creation
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("mydb.db")
}
fn default_extensions() -> Vec<String> {
    vec!["delta".to_string()]
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            extensions: default_extensions(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, or `None` if the file does not exist
    ///
    /// Any other failure, including a parse error, is returned.
    pub fn load_optional(path: impl AsRef<std::path::Path>) -> anyhow::Result<Option<Self>> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => Ok(None),
                _ => Err(e),
            },
        }
    }
}
