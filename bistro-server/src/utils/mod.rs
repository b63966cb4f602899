//! Utility module - shared helpers and error re-exports
//!
//! - [`AppError`] / [`AppResult`] - API error type (from `shared::error`)
//! - [`FormInput`] - form extractor that rejects with `AppError`
//! - [`parse_selector`] - `key=value` path segments
//! - logging and validation helpers

pub mod extract;
pub mod logger;
pub mod validation;

pub use extract::{FormInput, parse_selector};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
