//! HTTP server command
//!
//! Maps command-line options onto `ServerConfig` and runs the server.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use userbase_server::config::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_DATABASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_PORT,
    DEFAULT_RETRY_INTERVAL,
};
use userbase_server::retry::RetryPolicy;
use userbase_server::{run_server, ServerConfig};

/// Arguments for the server
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DB_DSN", default_value = DEFAULT_DATABASE_URL, hide_default_value = true)]
    pub database_url: String,

    /// Port to listen on (all interfaces)
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origin allowed to call the API from a browser
    #[arg(long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// Connection retries after the first failed attempt
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value_t = DEFAULT_RETRY_INTERVAL.as_secs())]
    pub retry_interval_secs: u64,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            database_url: args.database_url,
            port: args.port,
            allowed_origin: args.allowed_origin,
            retry: RetryPolicy {
                max_retries: args.max_retries,
                interval: Duration::from_secs(args.retry_interval_secs),
            },
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from(args);
    tracing::info!("Starting userbase server on port {}", config.port);

    if let Err(err) = run_server(config).await {
        tracing::error!("{}", err);
        return Err(err).context("userbase server failed");
    }

    Ok(())
}
