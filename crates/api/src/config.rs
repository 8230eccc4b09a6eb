//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use mock_api::ApiConfig;

const DEFAULT_ADDR: &str = "127.0.0.1:8790";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Settings for the mock API behind the gateway.
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SKILLSYNC_API_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `SKILLSYNC_LATENCY` | `simulated` or `instant` | `simulated` |
    /// | `SKILLSYNC_STORAGE_DIR` | Session storage directory | (in-memory) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SKILLSYNC_API_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self {
            addr,
            api: ApiConfig::from_env()?,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SKILLSYNC_API_ADDR format")]
    InvalidAddr,

    #[error(transparent)]
    Api(#[from] mock_api::ConfigError),
}
