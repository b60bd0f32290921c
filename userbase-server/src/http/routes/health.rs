//! Health check endpoint

use axum::{http::StatusCode, routing::get, Router};

/// GET /healthz
///
/// Always 200 with an empty body; does not touch the database.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz))
}
