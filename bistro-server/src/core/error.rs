use thiserror::Error;

use crate::utils::AppError;

/// Errors that stop the server from starting or keep it from running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Database initialization failed: {0}")]
    Database(#[from] AppError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
