//! Axum server setup
//!
//! Startup order: validate config, wait for the database, build the
//! router, bind, serve until Ctrl+C/SIGTERM, then close the pool.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::cors::CorsPolicy;
use super::routes;
use crate::config::ServerConfig;
use crate::db::{connect_with_retry, PgUserStore, UserStore};
use crate::error::Result;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.inner.store.as_ref()
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, cors: &CorsPolicy) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router());

    cors.apply(routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Errors
///
/// Fails on an invalid origin, when the database stays unreachable past
/// the retry policy, or when the listener cannot be bound.
///
/// # Example
///
/// ```ignore
/// run_server(ServerConfig::default()).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let cors = CorsPolicy::new(config.origin_header()?);

    tracing::info!(
        max_retries = config.retry.max_retries,
        interval_secs = config.retry.interval.as_secs_f64(),
        "Connecting to database"
    );
    let pool = connect_with_retry(&config.database_url, &config.retry).await?;

    let state = AppState::new(PgUserStore::new(pool.clone()));
    let app = build_router(state, &cors);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
