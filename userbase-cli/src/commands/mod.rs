//! Command implementations for the userbase binary

pub mod serve;

pub use serve::run_serve;
