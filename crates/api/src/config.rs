use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use practices_db::StoreConfig;

use crate::logging::LogFormat;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set when STORAGE_BACKEND={backend}")]
    Missing {
        var: &'static str,
        backend: &'static str,
    },

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Read once at startup; never re-read while the server runs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `10000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
    /// Storage adapter and its connection settings.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT`                 | `10000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    /// | `LOG_FORMAT`           | `pretty`     |
    /// | `STORAGE_BACKEND`      | `postgres`   |
    /// | `DATABASE_URL`         | required for `postgres` |
    /// | `DB_MAX_CONNECTIONS`   | `20`         |
    /// | `MONGODB_URI`          | required for `mongodb` |
    /// | `MONGODB_DATABASE`     | `practices`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = parse_or(&var, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&var, "PORT", 10000u16)?;
        let request_timeout_secs = parse_or(&var, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let log_format = parse_or(&var, "LOG_FORMAT", LogFormat::Pretty)?;

        let backend = var("STORAGE_BACKEND").unwrap_or_else(|| "postgres".into());
        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => StoreConfig::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing {
                    var: "DATABASE_URL",
                    backend: "postgres",
                })?,
                max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 20u32)?,
            },
            "mongodb" | "mongo" => StoreConfig::MongoDb {
                uri: var("MONGODB_URI").ok_or(ConfigError::Missing {
                    var: "MONGODB_URI",
                    backend: "mongodb",
                })?,
                database: var("MONGODB_DATABASE").unwrap_or_else(|| "practices".into()),
            },
            "memory" => StoreConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORAGE_BACKEND",
                    reason: format!("unknown backend '{other}' (expected postgres, mongodb or memory)"),
                })
            }
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            log_format,
            store,
        })
    }
}

/// Parse `key` if set, otherwise return `default`.
fn parse_or<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: key,
            reason: format!("'{raw}': {e}"),
        }),
        None => Ok(default),
    }
}
