//! Process configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use eventadmin_observability::{ObservabilityConfig, ObservabilityConfigError};

const BIND_ADDR_ENV: &str = "EVENTADMIN_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EVENTADMIN_BIND_ADDR `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error(transparent)]
    Observability(#[from] ObservabilityConfigError),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub observability: ObservabilityConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = parse_bind_addr(std::env::var(BIND_ADDR_ENV).ok().as_deref())?;
        let observability = ObservabilityConfig::from_env()?;
        Ok(Self {
            bind_addr,
            observability,
        })
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let value = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BIND_ADDR);
    value.parse().map_err(|source| ConfigError::BindAddr {
        value: value.to_string(),
        source,
    })
}
