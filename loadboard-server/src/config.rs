//! Server configuration loaded from environment variables

use loadboard_core::API_KEY_ENV;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Default dataset location, relative to the working directory
pub const DEFAULT_LOADS_PATH: &str = "loads.json";

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,loadboard=debug";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `BIND_ADDRESS` is not a socket address
    #[error("Invalid BIND_ADDRESS {value:?}: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret for `X-API-KEY`; `None` when unset or empty
    pub api_key: Option<String>,
    /// Dataset file read once at startup
    pub loads_path: PathBuf,
    /// Socket address to listen on
    pub bind_address: SocketAddr,
    /// Tracing filter directive
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).filter(|key| !key.is_empty());

        let loads_path = lookup("LOADS_PATH")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_LOADS_PATH.to_string())
            .into();

        let bind_raw = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_raw
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: bind_raw.clone(),
                source,
            })?;

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(ServerConfig {
            api_key,
            loads_path,
            bind_address,
            log_filter,
            log_format,
        })
    }
}
