//! PostgreSQL user repository
//!
//! Path ids are parsed with `numeric_id` and bound as a nullable
//! `BIGINT`; an id that is not a number binds `NULL` and matches nothing.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{numeric_id, StoreError, UserStore};
use crate::models::{NewUser, User};

/// User repository backed by a sqlx pool
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users: Vec<User> = sqlx::query_as("SELECT id, name, email FROM users ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;

        Ok(User {
            id,
            name: user.name,
            email: user.email,
        })
    }

    async fn update(&self, id: &str, user: &NewUser) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&user.name)
            .bind(&user.email)
            .bind(numeric_id(id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(numeric_id(id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p userbase-server -- --ignored
    //
    // Each test works in its own temporary table shadowing `users`.

    async fn test_store() -> PgUserStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("pool creation failed");

        sqlx::query(
            "CREATE TEMPORARY TABLE users (id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .expect("create temp table failed");

        PgUserStore::new(pool)
    }

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: format!("{name}@example.com"),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let store = test_store().await;
        assert!(store.list().await.unwrap().is_empty());

        let a = store.create(new_user("a")).await.unwrap();
        let b = store.create(new_user("b")).await.unwrap();
        let c = store.create(new_user("c")).await.unwrap();
        assert!(a.id < b.id && b.id < c.id);

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_report_rows_affected() {
        let store = test_store().await;
        let user = store.create(new_user("a")).await.unwrap();
        let id = user.id.to_string();

        assert_eq!(store.update(&id, &new_user("z")).await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap()[0].name, "z");

        assert_eq!(store.update("999999", &new_user("z")).await.unwrap(), 0);
        assert_eq!(store.update("abc", &new_user("z")).await.unwrap(), 0);
        assert_eq!(store.update("1abc", &new_user("z")).await.unwrap(), 0);

        let padded = format!("+0{id}");
        assert_eq!(store.update(&padded, &new_user("y")).await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap()[0].name, "y");

        assert_eq!(store.delete(&id).await.unwrap(), 1);
        assert_eq!(store.delete(&id).await.unwrap(), 0);
    }
}
