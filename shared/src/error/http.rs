//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::CustomerNotFound
            | Self::WaitlistEntryNotFound
            | Self::TableNotFound
            | Self::OrderNotFound
            | Self::FrontWorkerNotFound
            | Self::BackWorkerNotFound
            | Self::FoodItemNotFound
            | Self::FoodTypeNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::TableOccupied => StatusCode::CONFLICT,

            // 408 Request Timeout
            Self::TimeoutError => StatusCode::REQUEST_TIMEOUT,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
