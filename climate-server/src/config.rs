//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable naming the SQLite database file.
pub const DB_PATH_VAR: &str = "CLIMATE_DB_PATH";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "CLIMATE_BIND_ADDR";

const DEFAULT_DB_PATH: &str = "Resources/hawaii.sqlite";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Errors in the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the climate server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database holding the `station` and `measurement` tables
    pub db_path: PathBuf,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = lookup(DB_PATH_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse::<SocketAddr>().map_err(|source| ConfigError::InvalidAddr {
            var: BIND_ADDR_VAR,
            value: addr.clone(),
            source,
        })?;

        Ok(Self {
            db_path: PathBuf::from(db_path),
            bind_addr,
        })
    }

    /// Set the database path.
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}
