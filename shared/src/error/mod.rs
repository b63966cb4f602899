//! Unified error system for Bistro
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error envelope written to HTTP responses
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Waitlist errors
//! - 2xxx: Table errors
//! - 3xxx: Order errors
//! - 4xxx: Worker errors
//! - 5xxx: Food errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::TableOccupied).with_detail("tableID", 5);
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
