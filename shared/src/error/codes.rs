//! Unified error codes for the Bistro service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Waitlist / customer errors
//! - 2xxx: Table errors
//! - 3xxx: Order errors
//! - 4xxx: Worker errors
//! - 5xxx: Food / menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can branch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Waitlist ====================
    /// Customer not found
    CustomerNotFound = 1001,
    /// No open waitlist entry for the customer
    WaitlistEntryNotFound = 1002,
    /// Group size must be positive
    InvalidGroupSize = 1003,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table already holds a customer
    TableOccupied = 2002,
    /// Seated group is larger than the table
    TableCapacityExceeded = 2003,

    // ==================== 3xxx: Order ====================
    /// Order not found
    OrderNotFound = 3001,

    // ==================== 4xxx: Worker ====================
    /// Front-of-house worker not found
    FrontWorkerNotFound = 4001,
    /// Back-of-house worker not found
    BackWorkerNotFound = 4002,

    // ==================== 5xxx: Food ====================
    /// Food item not found
    FoodItemNotFound = 5001,
    /// Food type not found
    FoodTypeNotFound = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Waitlist
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::WaitlistEntryNotFound => "No open waitlist entry for customer",
            ErrorCode::InvalidGroupSize => "Group size must be at least 1",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableCapacityExceeded => "Group is larger than table capacity",

            // Order
            ErrorCode::OrderNotFound => "Order not found",

            // Worker
            ErrorCode::FrontWorkerNotFound => "Front worker not found",
            ErrorCode::BackWorkerNotFound => "Back worker not found",

            // Food
            ErrorCode::FoodItemNotFound => "Food item not found",
            ErrorCode::FoodTypeNotFound => "Food type not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Waitlist
            1001 => Ok(ErrorCode::CustomerNotFound),
            1002 => Ok(ErrorCode::WaitlistEntryNotFound),
            1003 => Ok(ErrorCode::InvalidGroupSize),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableOccupied),
            2003 => Ok(ErrorCode::TableCapacityExceeded),

            // Order
            3001 => Ok(ErrorCode::OrderNotFound),

            // Worker
            4001 => Ok(ErrorCode::FrontWorkerNotFound),
            4002 => Ok(ErrorCode::BackWorkerNotFound),

            // Food
            5001 => Ok(ErrorCode::FoodItemNotFound),
            5002 => Ok(ErrorCode::FoodTypeNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        assert_eq!(ErrorCode::CustomerNotFound.code(), 1001);
        assert_eq!(ErrorCode::WaitlistEntryNotFound.code(), 1002);
        assert_eq!(ErrorCode::InvalidGroupSize.code(), 1003);
        assert_eq!(ErrorCode::TableNotFound.code(), 2001);
        assert_eq!(ErrorCode::TableOccupied.code(), 2002);
        assert_eq!(ErrorCode::OrderNotFound.code(), 3001);
        assert_eq!(ErrorCode::BackWorkerNotFound.code(), 4002);
        assert_eq!(ErrorCode::FoodItemNotFound.code(), 5001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_covers_every_variant() {
        let codes = [
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::CustomerNotFound,
            ErrorCode::WaitlistEntryNotFound,
            ErrorCode::InvalidGroupSize,
            ErrorCode::TableNotFound,
            ErrorCode::TableOccupied,
            ErrorCode::TableCapacityExceeded,
            ErrorCode::OrderNotFound,
            ErrorCode::FrontWorkerNotFound,
            ErrorCode::BackWorkerNotFound,
            ErrorCode::FoodItemNotFound,
            ErrorCode::FoodTypeNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::TimeoutError,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::TableOccupied).unwrap();
        assert_eq!(json, "2002");

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::TableNotFound), "2001");
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }
}
