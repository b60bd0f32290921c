//! Database layer - connection establishment and user storage
//!
//! Handlers only see the `UserStore` trait. `PgUserStore` runs
//! parameterized SQL against `users`; `MemoryUserStore` keeps rows in
//! process for tests and database-less runs.

pub mod connect;
pub mod memory;
pub mod postgres;
pub mod store;

pub use connect::{connect_with_retry, ConnectError};
pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
