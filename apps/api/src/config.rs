//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads an optional `.env` file first.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use cornerstore_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind (`CORNERSTORE_HOST`, default `0.0.0.0`)
    pub host: String,

    /// HTTP port (`CORNERSTORE_PORT`, default `5000`)
    pub port: u16,

    /// SQLite file (`CORNERSTORE_DB_PATH`, default `./cornerstore.db`)
    pub database_path: PathBuf,

    /// Pool size (`CORNERSTORE_DB_MAX_CONNECTIONS`, default `5`)
    pub max_connections: u32,

    /// Seed an empty store on startup (`CORNERSTORE_SEED`, default `true`)
    pub seed: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            host: get("CORNERSTORE_HOST", "0.0.0.0"),

            port: get("CORNERSTORE_PORT", "5000")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CORNERSTORE_PORT".to_string()))?,

            database_path: PathBuf::from(get("CORNERSTORE_DB_PATH", "./cornerstore.db")),

            max_connections: get("CORNERSTORE_DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("CORNERSTORE_DB_MAX_CONNECTIONS".to_string())
                })?,

            seed: parse_flag(&get("CORNERSTORE_SEED", "true"))
                .ok_or_else(|| ConfigError::InvalidValue("CORNERSTORE_SEED".to_string()))?,
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "CORNERSTORE_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CORNERSTORE_HOST".to_string()))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone())
            .max_connections(self.max_connections)
            .seed(self.seed)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
