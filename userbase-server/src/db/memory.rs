//! In-process user store
//!
//! Mirrors `PgUserStore` semantics: ids come from a counter that never
//! goes backwards, and path ids match by numeric value.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{numeric_id, StoreError, UserStore};
use crate::models::{NewUser, User};

#[derive(Default)]
struct Rows {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

impl Rows {
    fn key_for(&self, id: &str) -> Option<i64> {
        numeric_id(id).filter(|key| self.users.contains_key(key))
    }
}

/// `UserStore` kept in memory
#[derive(Default)]
pub struct MemoryUserStore {
    rows: RwLock<Rows>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.users.values().rev().cloned().collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;

        let user = User {
            id: rows.last_id,
            name: user.name,
            email: user.email,
        };
        rows.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, user: &NewUser) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(key) = rows.key_for(id) else {
            return Ok(0);
        };

        if let Some(row) = rows.users.get_mut(&key) {
            row.name.clone_from(&user.name);
            row.email.clone_from(&user.email);
        }
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let removed = rows
            .key_for(id)
            .and_then(|key| rows.users.remove(&key))
            .is_some();
        Ok(u64::from(removed))
    }
}
