//! Input validation helpers
//!
//! SQLite TEXT has no length enforcement, so limits are checked here before
//! anything reaches the store.

use crate::utils::{AppError, ErrorCode};

/// Person names (first / last)
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Party size must be at least one guest
pub fn validate_group_size(group_size: i64) -> Result<(), AppError> {
    if group_size < 1 {
        return Err(AppError::with_message(
            ErrorCode::InvalidGroupSize,
            format!("groupSize must be at least 1, got {group_size}"),
        )
        .with_detail("field", "groupSize"));
    }
    Ok(())
}
