//! Configuration management and validation.
//!
//! Provides the service-level configuration for the extraction HTTP server.
//! The extraction algorithm itself is deliberately not configurable: its
//! thresholds and tables live in [`crate::constants`] so behavior stays
//! identical everywhere the crate runs.

use crate::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the service
    pub host: String,

    /// Bind port for the service
    pub port: u16,

    /// Origins allowed to call the service cross-origin
    pub allowed_origins: Vec<String>,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Create a configuration with explicit values
    pub fn new(
        host: impl Into<String>,
        port: u16,
        allowed_origins: Vec<String>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            allowed_origins,
            max_upload_bytes,
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::configuration("Server host cannot be empty"));
        }

        if self.port == 0 {
            return Err(Error::configuration("Server port cannot be 0"));
        }

        if self.allowed_origins.is_empty() {
            return Err(Error::configuration(
                "At least one allowed origin is required",
            ));
        }

        if self
            .allowed_origins
            .iter()
            .any(|origin| origin.trim().is_empty())
        {
            return Err(Error::configuration("Allowed origins cannot be empty"));
        }

        if self.max_upload_bytes == 0 {
            return Err(Error::configuration(
                "Maximum upload size must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Resolve the bind address as a socket address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: AddrParseError| {
                Error::configuration(format!(
                    "Invalid bind address {}:{} ({})",
                    self.host, self.port, e
                ))
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.host = "".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.allowed_origins.clear();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr_resolution() {
        let config = ServerConfig::new(
            "127.0.0.1",
            8080,
            vec!["http://localhost:3002".to_string()],
            1024,
        );
        let addr = config.bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");

        let config = ServerConfig::new(
            "not an address",
            8080,
            vec!["http://localhost:3002".to_string()],
            1024,
        );
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ServerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: ServerConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.host, config.host);
        assert_eq!(restored.port, config.port);
        assert_eq!(restored.allowed_origins, config.allowed_origins);
    }
}
