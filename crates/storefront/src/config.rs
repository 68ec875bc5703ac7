//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront runs with defaults and the
//! built-in sample catalog when nothing is set.
//!
//! - `ELITESTORE_HOST` - Bind address (default: 127.0.0.1)
//! - `ELITESTORE_PORT` - Listen port (default: 3000)
//! - `ELITESTORE_CATALOG_URL` - Remote catalog endpoint returning a JSON
//!   array of products; unset or unreachable means the sample catalog
//! - `ELITESTORE_CART_PATH` - File holding the serialized cart
//!   (default: elitestore_cart.json)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CART_PATH: &str = "elitestore_cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote catalog endpoint; `None` means the built-in sample catalog
    pub catalog_url: Option<String>,
    /// Path of the single durable cart slot
    pub cart_path: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            catalog_url: None,
            cart_path: PathBuf::from(DEFAULT_CART_PATH),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = match optional_var("ELITESTORE_HOST") {
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("ELITESTORE_HOST".to_owned(), raw)
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match optional_var("ELITESTORE_PORT") {
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("ELITESTORE_PORT".to_owned(), raw)
            })?,
            None => DEFAULT_PORT,
        };

        let catalog_url = optional_var("ELITESTORE_CATALOG_URL");

        let cart_path = optional_var("ELITESTORE_CART_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);

        Ok(Self {
            host,
            port,
            catalog_url,
            cart_path,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.catalog_url.is_none());
        assert_eq!(config.cart_path, PathBuf::from("elitestore_cart.json"));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().expect("valid addr"),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }
}
