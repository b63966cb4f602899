//! Shared types for the Bistro service
//!
//! Wire models, the unified error system and small utilities used by the
//! server crate and its tests.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
