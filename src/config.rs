use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

/// Configuration for the routing server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Graph data document loaded at startup and on reload
    pub data_path: PathBuf,
    pub enable_cors: bool,
    /// Per-query deadline, `None` disables it
    pub query_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5001,
            data_path: PathBuf::from("graph_data.json"),
            enable_cors: true,
            query_timeout: Some(Duration::from_millis(5000)),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `HOST`, `PORT`, `GRAPH_DATA`, `QUERY_TIMEOUT_MS` and `CORS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = parse_var("HOST", &host)?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(path) = lookup("GRAPH_DATA") {
            if path.trim().is_empty() {
                return Err(Error::Config("GRAPH_DATA must not be empty".to_string()));
            }
            config.data_path = PathBuf::from(path);
        }
        if let Some(timeout) = lookup("QUERY_TIMEOUT_MS") {
            let millis: u64 = parse_var("QUERY_TIMEOUT_MS", &timeout)?;
            config.query_timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }
        if let Some(cors) = lookup("CORS") {
            config.enable_cors = parse_var("CORS", &cors)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} has invalid value {:?}", key, value)))
}
