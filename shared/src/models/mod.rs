//! Data models
//!
//! Shared wire types for the Bistro API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! JSON keys keep the historical column spelling (`customerID`, `groupSize`);
//! Rust fields are snake_case. All IDs are `i64` (SQLite INTEGER PRIMARY KEY),
//! all timestamps are UTC epoch milliseconds.

pub mod customer;
pub mod dining_table;
pub mod food;
pub mod order;
pub mod serde_helpers;
pub mod worker;

// Re-exports
pub use customer::*;
pub use dining_table::*;
pub use food::*;
pub use order::*;
pub use worker::*;
