//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::latency::{Latency, ParseLatencyError};

/// Mock API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Whether calls sleep their simulated delay.
    pub latency: Latency,
    /// Directory for the durable session record; in-memory when `None`.
    pub storage_dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Configuration with no delays and in-memory storage.
    pub fn instant() -> Self {
        Self {
            latency: Latency::Instant,
            storage_dir: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SKILLSYNC_LATENCY` | `simulated` or `instant` | `simulated` |
    /// | `SKILLSYNC_STORAGE_DIR` | Session storage directory | (in-memory) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("SKILLSYNC_LATENCY").ok(),
            env::var("SKILLSYNC_STORAGE_DIR").ok(),
        )
    }

    fn from_values(
        latency: Option<String>,
        storage_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let latency = match latency {
            Some(value) if !value.trim().is_empty() => value.parse::<Latency>()?,
            _ => Latency::default(),
        };

        let storage_dir = storage_dir
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            latency,
            storage_dir,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SKILLSYNC_LATENCY: {0}")]
    InvalidLatency(#[from] ParseLatencyError),
}
