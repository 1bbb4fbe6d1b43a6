//! Configuration management for the MCP server.
//!
//! Configuration is built from defaults, then overridden by a `.env` file and
//! `MCP_`-prefixed environment variables.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default management API endpoint of a local broker.
pub const DEFAULT_BROKER_URL: &str = "http://localhost:15672/api";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Broker management API connection.
    pub broker: BrokerConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Connection settings for the broker management API.
#[derive(Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Base URL of the management API, e.g. `http://localhost:15672/api`.
    pub base_url: String,

    /// Basic auth user.
    pub username: String,

    /// Basic auth password.
    pub password: String,

    /// Request timeout handed to the HTTP client. `None` keeps the client default.
    pub timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BROKER_URL.to_string(),
            username: "guest".to_string(),
            password: "guest".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "broker-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            broker: BrokerConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_BROKER_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env();
        config.broker = BrokerConfig::from_env();

        config
    }
}

impl BrokerConfig {
    /// Load broker settings from `MCP_BROKER_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut broker = Self::default();

        if let Ok(url) = std::env::var("MCP_BROKER_URL") {
            broker.base_url = url;
        }

        if let Ok(username) = std::env::var("MCP_BROKER_USERNAME") {
            broker.username = username;
        }

        if let Ok(password) = std::env::var("MCP_BROKER_PASSWORD") {
            broker.password = password;
        } else {
            warn!("MCP_BROKER_PASSWORD not set - using the default broker credentials");
        }

        if let Ok(timeout) = std::env::var("MCP_BROKER_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => broker.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid MCP_BROKER_TIMEOUT_SECS: {}", timeout),
            }
        }

        broker
    }
}
