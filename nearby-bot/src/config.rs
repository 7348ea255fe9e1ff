//! Process configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Messaging API channel access token (`LINE_CHANNEL_ACCESS_TOKEN`)
    pub channel_access_token: String,

    /// Webhook signing secret (`LINE_CHANNEL_SECRET`)
    pub channel_secret: String,

    /// Listen address (`BIND_ADDR`, `PORT`)
    pub listen: SocketAddr,

    /// Dataset URL override (`STATION_DATASET_URL`)
    pub dataset_url: Option<String>,

    /// Serve stations from this file instead of fetching (`STATION_DATASET_FILE`)
    pub dataset_file: Option<PathBuf>,

    /// Messaging API base URL override (`LINE_API_BASE`)
    pub line_api_base: Option<String>,
}

impl Config {
    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let channel_access_token = get("LINE_CHANNEL_ACCESS_TOKEN")
            .ok_or(ConfigError::Missing("LINE_CHANNEL_ACCESS_TOKEN"))?;
        let channel_secret =
            get("LINE_CHANNEL_SECRET").ok_or(ConfigError::Missing("LINE_CHANNEL_SECRET"))?;

        let port = match get("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let ip = match get("BIND_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            channel_access_token,
            channel_secret,
            listen: SocketAddr::new(ip, port),
            dataset_url: get("STATION_DATASET_URL"),
            dataset_file: get("STATION_DATASET_FILE").map(PathBuf::from),
            line_api_base: get("LINE_API_BASE"),
        })
    }
}
