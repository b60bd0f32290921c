//! Error types for userbase-server

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::ConnectError;

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Errors that stop the server from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
