//! Process configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::hebcal::HebcalConfig;

/// Default listening port.
const DEFAULT_PORT: u16 = 8000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`HOST`, default `0.0.0.0`)
    pub host: IpAddr,
    /// Port to listen on (`PORT`, default 8000)
    pub port: u16,
    /// Upstream provider settings (`HEBCAL_BASE_URL`, `HEBCAL_TIMEOUT_SECS`,
    /// `HEBCAL_HAVDALAH_MINS`)
    pub hebcal: HebcalConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to their defaults; set but
    /// malformed ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = match get("HOST") {
            Some(v) => parse("HOST", v)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("PORT") {
            Some(v) => parse("PORT", v)?,
            None => DEFAULT_PORT,
        };

        let mut hebcal = HebcalConfig::new();
        if let Some(url) = get("HEBCAL_BASE_URL") {
            hebcal = hebcal.with_base_url(url);
        }
        if let Some(v) = get("HEBCAL_TIMEOUT_SECS") {
            let secs: u64 = parse("HEBCAL_TIMEOUT_SECS", v.clone())?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: "HEBCAL_TIMEOUT_SECS",
                    value: v,
                    reason: "must be at least 1".to_string(),
                });
            }
            hebcal = hebcal.with_timeout(secs);
        }
        if let Some(v) = get("HEBCAL_HAVDALAH_MINS") {
            hebcal = hebcal.with_havdalah_mins(parse("HEBCAL_HAVDALAH_MINS", v)?);
        }

        Ok(Self { host, port, hebcal })
    }

    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            hebcal: HebcalConfig::default(),
        }
    }
}

fn parse<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
