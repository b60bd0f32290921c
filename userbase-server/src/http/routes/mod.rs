//! Route handlers for userbase-server
//!
//! - health: liveness check
//! - users: CRUD over `/api/users`

pub mod health;
pub mod users;
