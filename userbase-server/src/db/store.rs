//! Storage seam used by the HTTP handlers

use async_trait::async_trait;

use crate::models::{NewUser, User};

/// Storage error type
///
/// Displays as the raw driver message, which is what clients receive.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// CRUD over the `users` table.
///
/// `id` arguments are taken verbatim from the request path and matched by
/// numeric value (see [`numeric_id`]). A value that matches no row
/// (including a non-numeric one) is not an error; the affected row count
/// is returned instead.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, newest id first.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a row and return it with its generated id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Overwrite name and email. Returns rows affected.
    async fn update(&self, id: &str, user: &NewUser) -> Result<u64, StoreError>;

    /// Remove a row. Returns rows affected.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;
}

/// Numeric value of a path id, if it has one.
///
/// Surrounding whitespace, a sign and leading zeros are accepted, so
/// `"01"`, `"+1"` and `" 1 "` all name row 1. Anything else (`"1abc"`,
/// `"1.0"`, out of `i64` range) names no row.
pub fn numeric_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
