//! Runtime configuration from environment variables (`.env` is honoured).

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {name}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub request_timeout: Duration,
}

impl Config {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS` and `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = parse(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let max_connections: NonZeroU32 = parse(
            &lookup,
            "DB_MAX_CONNECTIONS",
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        let timeout_secs: u64 = parse(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )?;
        Ok(Self {
            database_url,
            bind_addr,
            max_connections: max_connections.get(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|_| ConfigError { name, value })
}
