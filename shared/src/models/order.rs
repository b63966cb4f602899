//! Order Model

use serde::{Deserialize, Serialize};

/// Kitchen order
///
/// Pending until a back-of-house worker is assigned, then completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    #[serde(rename = "orderID")]
    pub order_id: i64,
    #[serde(rename = "customerID")]
    pub customer_id: Option<i64>,
    #[serde(rename = "tableID")]
    pub table_id: Option<i64>,
    #[serde(rename = "foodItemID")]
    pub food_item_id: Option<i64>,
    #[serde(rename = "backWorkerID")]
    pub back_worker_id: Option<i64>,
    #[serde(rename = "placedAt")]
    pub placed_at: i64,
}

/// Orders split by completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersGrouped {
    #[serde(rename = "Upcoming")]
    pub upcoming: Vec<Order>,
    #[serde(rename = "Completed")]
    pub completed: Vec<Order>,
}

/// Assign back worker form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackWorkerAssignment {
    #[serde(rename = "orderID")]
    pub order_id: i64,
    #[serde(rename = "backWorkerID")]
    pub back_worker_id: i64,
}

