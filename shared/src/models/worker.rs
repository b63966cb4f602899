//! Worker Models

use serde::{Deserialize, Serialize};

/// Front-of-house worker (host, server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FrontWorker {
    #[serde(rename = "frontWorkerID")]
    pub front_worker_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// Back-of-house worker (kitchen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BackWorker {
    #[serde(rename = "backWorkerID")]
    pub back_worker_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}
