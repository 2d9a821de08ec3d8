//! Configuration types

use acd_domain::constants::{
    DEFAULT_PAGE_CONCURRENCY, DEFAULT_POOL_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_UNISPHERE_PORT, DEFAULT_VOLUME_PAGE_SIZE,
};
use acd_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream management service connection
    pub unisphere: UnisphereConfig,
    /// HTTP server binding
    pub server: ServerConfig,
    /// Collection fan-out limits
    pub collector: CollectorConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.unisphere.validate()?;
        self.collector.validate()
    }
}

/// Connection parameters for the Unisphere management service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnisphereConfig {
    /// Server hostname or IP address
    pub host: String,

    /// REST API port
    pub port: u16,

    /// Username for HTTP Basic Authentication
    pub username: String,

    /// Password for HTTP Basic Authentication
    pub password: String,

    /// Array serial number to collect
    pub array_id: String,

    /// Whether to verify TLS certificates
    pub verify_ssl: bool,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for UnisphereConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_UNISPHERE_PORT,
            username: String::new(),
            password: String::new(),
            array_id: String::new(),
            verify_ssl: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl UnisphereConfig {
    /// Validate required connection parameters
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::configuration("Unisphere host is required"));
        }
        if self.username.is_empty() {
            return Err(Error::configuration("Username is required"));
        }
        if self.password.is_empty() {
            return Err(Error::configuration("Password is required"));
        }
        if self.array_id.is_empty() {
            return Err(Error::configuration("Array ID is required"));
        }
        if self.port == 0 {
            return Err(Error::configuration("Port must be a positive integer"));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Collection fan-out configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Volume records requested per bulk page
    pub volume_page_size: usize,
    /// Concurrent per-pool metric fetches
    pub pool_concurrency: usize,
    /// Concurrent volume page fetches
    pub page_concurrency: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            volume_page_size: DEFAULT_VOLUME_PAGE_SIZE,
            pool_concurrency: DEFAULT_POOL_CONCURRENCY,
            page_concurrency: DEFAULT_PAGE_CONCURRENCY,
        }
    }
}

impl CollectorConfig {
    /// Validate fan-out bounds
    pub fn validate(&self) -> Result<()> {
        if self.volume_page_size == 0 {
            return Err(Error::configuration("volume_page_size must be at least 1"));
        }
        if self.pool_concurrency == 0 || self.page_concurrency == 0 {
            return Err(Error::configuration("concurrency limits must be at least 1"));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: crate::constants::DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
