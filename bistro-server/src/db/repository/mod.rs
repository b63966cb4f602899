//! Repository Module
//!
//! Free functions over a `SqlitePool`. Mutations open one write transaction
//! with [`begin_write`] and run every precondition check inside it; an early
//! `?` drops the transaction, which rolls back.

pub mod dining_table;
pub mod food;
pub mod order;
pub mod waitlist;
pub mod worker;

use shared::error::{AppError, ErrorCode};
use sqlx::{Sqlite, SqlitePool, Transaction};
use thiserror::Error;

/// Repository error types
///
/// Rejections carry the domain [`ErrorCode`] so handlers can surface the
/// precise reason (`TableOccupied`, `OrderNotFound`, ...).
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("Conflict: {message}")]
    Conflict { code: ErrorCode, message: String },

    #[error("Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl RepoError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
        }
    }

    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Error code this error surfaces as
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. }
            | Self::Conflict { code, .. }
            | Self::Validation { code, .. } => *code,
            Self::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { code, message }
            | RepoError::Conflict { code, message }
            | RepoError::Validation { code, message } => AppError::with_message(code, message),
            RepoError::Database(msg) => {
                // Store details stay in the log
                tracing::error!(error = %msg, "Repository database error");
                AppError::database("Database error")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Begin a transaction holding the write lock from its first statement.
///
/// A deferred transaction that reads before it writes cannot upgrade its
/// lock while another writer is active; SQLite fails it with `SQLITE_BUSY`
/// without consulting the busy timeout. `BEGIN IMMEDIATE` waits instead.
pub(crate) async fn begin_write(pool: &SqlitePool) -> RepoResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}
