//! Domain models
//!
//! `User` is the stored record; `UserPayload` is what clients send.

pub mod user;

pub use user::{NewUser, User, UserPayload};
