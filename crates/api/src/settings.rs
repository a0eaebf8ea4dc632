//! Server Configuration
//!
//! Layered settings: optional `chargescope.toml` in the working directory,
//! overridden by `CHARGESCOPE_*` environment variables (double underscore
//! separates nesting, e.g. `CHARGESCOPE_SERVER__PORT=9090`).

use crate::rate_limit::RateLimitConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use station_loader::DataSource;
use std::path::PathBuf;

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub rate_limit: RateLimitSettings,
}

/// Listen address settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Data source settings. A configured file wins over a configured URL;
/// with neither set, the bundled default path is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub file: Option<String>,
    pub url: Option<String>,
}

/// Rate limiting settings (GCRA replenish rate and burst).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        let defaults = RateLimitConfig::default();
        Self {
            per_second: defaults.per_second,
            burst_size: defaults.burst_size,
        }
    }
}

impl Settings {
    /// Load settings from file and environment layers.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("chargescope").required(false))
            .add_source(Environment::with_prefix("CHARGESCOPE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Resolve the configured data source.
    pub fn source(&self) -> DataSource {
        if let Some(file) = &self.data.file {
            DataSource::File(PathBuf::from(file))
        } else if let Some(url) = &self.data.url {
            DataSource::Http(url.clone())
        } else {
            DataSource::File(PathBuf::from("data/stations.json"))
        }
    }

    /// Rate limit config for the governor layer.
    pub fn rate_limit(&self) -> RateLimitConfig {
        RateLimitConfig {
            per_second: self.rate_limit.per_second,
            burst_size: self.rate_limit.burst_size,
        }
    }
}

impl ServerSettings {
    /// Get the bind address string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
