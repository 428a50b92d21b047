// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Command line flags are applied on top via `with_overrides`

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use bikelinks_config::{
    BIKELINKS_CORS_ORIGIN, BIKELINKS_DATABASE_PATH, BIKELINKS_HOST, BIKELINKS_MAX_CONNECTIONS,
    BIKELINKS_PORT, DEFAULT_DATABASE_FILE, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    PORT,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid max connections (expected a positive integer): {0}")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub cors_origin: Option<String>,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host_str = env::var(BIKELINKS_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str))?;

        // BIKELINKS_PORT wins over the legacy PORT variable
        let port = match env::var(BIKELINKS_PORT).or_else(|_| env::var(PORT)) {
            Ok(port_str) => port_str.trim().parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };
        validate_port(port)?;

        let database_path = env::var(BIKELINKS_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_FILE));

        let cors_origin = env::var(BIKELINKS_CORS_ORIGIN)
            .ok()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        let max_connections = match env::var(BIKELINKS_MAX_CONNECTIONS) {
            Ok(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(value)),
            },
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            host,
            port,
            database_path,
            cors_origin,
            max_connections,
        })
    }

    /// Apply command line flags; unset flags keep the environment value
    pub fn with_overrides(
        mut self,
        host: Option<IpAddr>,
        port: Option<u16>,
        database_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            validate_port(port)?;
            self.port = port;
        }
        if let Some(database_path) = database_path {
            self.database_path = database_path;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn validate_port(port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(())
}
