//! userbase-server: HTTP server for the users table
//!
//! Exposes list/create/update/delete over `/api/users`, backed by
//! PostgreSQL through sqlx. Startup waits for the database with a
//! bounded, fixed-delay retry before the listener is bound.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod retry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use http::{build_router, run_server, AppState};
