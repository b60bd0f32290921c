//! Startup connection to PostgreSQL
//!
//! Each attempt opens a single connection and pings it. Only once that
//! works is the pool built, so a refused connection fails the attempt
//! immediately instead of waiting on the pool's acquire timeout.

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use thiserror::Error;

use crate::retry::{retry_fixed, RetryExhausted, RetryPolicy};

/// Connection establishment failed
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("database unreachable after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },
}

impl From<RetryExhausted<sqlx::Error>> for ConnectError {
    fn from(e: RetryExhausted<sqlx::Error>) -> Self {
        Self::Exhausted {
            attempts: e.attempts,
            source: e.last_error,
        }
    }
}

/// Open and verify a connection, retrying per `policy`.
///
/// # Errors
///
/// Returns `ConnectError::Exhausted` with the last driver error when every
/// attempt fails.
pub async fn connect_with_retry(
    database_url: &str,
    policy: &RetryPolicy,
) -> Result<PgPool, ConnectError> {
    let pool = retry_fixed(policy, |attempt| async move {
        tracing::debug!(attempt, "connecting to database");
        open_and_ping(database_url).await
    })
    .await?;

    tracing::info!("Connected to database");
    Ok(pool)
}

async fn open_and_ping(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut conn = PgConnection::connect(database_url).await?;
    conn.ping().await?;
    conn.close().await?;

    PgPoolOptions::new().connect_lazy(database_url)
}
