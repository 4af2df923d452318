//! Server configuration read from environment variables.
//!
//! - `TEXTPROC_HOST`: listen address (default: "0.0.0.0")
//! - `TEXTPROC_PORT`: listen port (default: "8000")
//! - `TEXTPROC_LOCALE`: label locale, `en` or `ru` (default: "en")

use std::net::{IpAddr, SocketAddr};

use textproc_core::{CoreError, Locale};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TEXTPROC_HOST '{0}': expected an IP address")]
    InvalidHost(String),

    #[error("invalid TEXTPROC_PORT '{0}': expected 0-65535")]
    InvalidPort(String),

    #[error("invalid TEXTPROC_LOCALE: {0}")]
    InvalidLocale(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub locale: Locale,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            locale: Locale::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("TEXTPROC_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match lookup("TEXTPROC_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let locale = match lookup("TEXTPROC_LOCALE") {
            Some(raw) => raw.parse::<Locale>()?,
            None => Locale::default(),
        };

        Ok(ServerConfig { host, port, locale })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
