//! HTTP server layer
//!
//! Axum server with:
//! - Fixed-origin CORS on every response
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod cors;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use cors::CorsPolicy;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
