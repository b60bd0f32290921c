//! Server configuration
//!
//! Built once at startup by the binary and passed down by value.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::retry::RetryPolicy;

/// Fallback connection string when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres:password@db:5432/my_app_db";

/// Port bound on all interfaces.
pub const DEFAULT_PORT: u16 = 8080;

/// The single origin allowed by CORS.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Retries after the first failed connection attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 15;

/// Delay between connection attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Configuration errors detected before startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid allowed origin '{origin}': not a valid header value")]
    InvalidOrigin { origin: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Port to listen on (bound to 0.0.0.0)
    pub port: u16,

    /// Trusted origin for `Access-Control-Allow-Origin`
    pub allowed_origin: String,

    /// Startup connection retry policy
    pub retry: RetryPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_owned(),
            retry: RetryPolicy {
                max_retries: DEFAULT_MAX_RETRIES,
                interval: DEFAULT_RETRY_INTERVAL,
            },
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// The allowed origin as a header value.
    pub fn origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|_| ConfigError::InvalidOrigin {
            origin: self.allowed_origin.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().port(), 8080);
        assert!(config.bind_addr().ip().is_unspecified());
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.retry.max_retries, 15);
        assert_eq!(config.retry.interval, Duration::from_secs(2));
    }

    #[test]
    fn origin_with_newline_is_rejected() {
        let config = ServerConfig {
            allowed_origin: "http://evil\n".into(),
            ..ServerConfig::default()
        };
        let err = config.origin_header().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
    }
}
