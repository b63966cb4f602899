//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Waitlist errors
/// - 2xxx: Table errors
/// - 3xxx: Order errors
/// - 4xxx: Worker errors
/// - 5xxx: Food errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Waitlist and customer errors (1xxx)
    Waitlist,
    /// Table errors (2xxx)
    Table,
    /// Order errors (3xxx)
    Order,
    /// Worker errors (4xxx)
    Worker,
    /// Food and menu errors (5xxx)
    Food,
    /// System errors (9xxx, and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Waitlist,
            2000..3000 => Self::Table,
            3000..4000 => Self::Order,
            4000..5000 => Self::Worker,
            5000..6000 => Self::Food,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
