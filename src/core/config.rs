//! Configuration management for the MCP server.
//!
//! Configuration is read once from the environment at startup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use super::error::{Error, Result};

/// Environment variable holding the path of the 7-Zip executable.
pub const ARCHIVER_PATH_VAR: &str = "7ZIP_PATH";

/// Alias for [`ARCHIVER_PATH_VAR`] that shells can export without quoting tricks.
pub const ARCHIVER_PATH_ALIAS_VAR: &str = "MCP_7ZIP_PATH";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External archiver configuration.
    pub archiver: ArchiverConfig,
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

/// Configuration for the external archiver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiverConfig {
    /// Absolute path of the 7-Zip executable.
    pub binary_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "7zip-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    pub fn from_env() -> Self {
        let mut logging = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        logging
    }
}

impl ArchiverConfig {
    /// Read the archiver path, failing when neither variable is set.
    pub fn from_env() -> Result<Self> {
        let binary_path = [ARCHIVER_PATH_VAR, ARCHIVER_PATH_ALIAS_VAR]
            .into_iter()
            .filter_map(|var| std::env::var_os(var))
            .find(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::config(format!("{} environment variable is required", ARCHIVER_PATH_VAR))
            })?;

        info!("Using archiver at {}", binary_path.display());
        Ok(Self { binary_path })
    }
}

impl Config {
    /// Create a configuration with default settings and the given archiver.
    pub fn with_archiver(binary_path: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            archiver: ArchiverConfig {
                binary_path: binary_path.into(),
            },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `7ZIP_PATH` (or `MCP_7ZIP_PATH`) is required. Optional variables are
    /// prefixed with `MCP_`, for example `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        let archiver = ArchiverConfig::from_env()?;

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        Ok(Self {
            server,
            logging: LoggingConfig::from_env(),
            archiver,
        })
    }
}
