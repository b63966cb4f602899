//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table as shown on the floor plan
///
/// Occupied iff `customer_id` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    #[serde(rename = "tableID")]
    pub table_id: i64,
    #[serde(rename = "frontWorkerID")]
    pub front_worker_id: Option<i64>,
    /// "first last" of the serving worker
    #[serde(rename = "workerName")]
    pub worker_name: Option<String>,
    #[serde(rename = "customerID")]
    pub customer_id: Option<i64>,
    pub capacity: i64,
    #[serde(rename = "typeName")]
    pub type_name: String,
    #[serde(rename = "seatingTime")]
    pub seating_time: Option<i64>,
}

/// Clear table form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableClear {
    #[serde(rename = "tableID")]
    pub table_id: i64,
}
