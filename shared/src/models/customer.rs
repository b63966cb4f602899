//! Customer and Waitlist Models

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Customer entity (one party of guests)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    #[serde(rename = "groupSize")]
    pub group_size: i64,
    /// Set when the party is seated at a table (epoch millis)
    #[serde(rename = "seatingTime")]
    pub seating_time: Option<i64>,
}

/// Waitlist entry
///
/// An entry is *waiting* while `exit_time` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaitlistEntry {
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "joinTime")]
    pub join_time: i64,
    #[serde(rename = "exitTime")]
    pub exit_time: Option<i64>,
}

/// Waitlist entry joined with its customer's group size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaitlistPartyEntry {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub entry: WaitlistEntry,
    #[serde(rename = "groupSize")]
    pub group_size: i64,
}

/// Waitlist split into still-waiting and exited parties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistGrouped {
    /// Mean wait in seconds over exited entries; `null` when none have exited
    #[serde(rename = "Average Wait")]
    pub average_wait: Option<f64>,
    #[serde(rename = "Waiting")]
    pub waiting: Vec<WaitlistPartyEntry>,
    #[serde(rename = "Seated")]
    pub seated: Vec<WaitlistPartyEntry>,
}

/// Enqueue form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEnqueue {
    #[serde(rename = "groupSize")]
    pub group_size: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// Dequeue form payload
///
/// `tableID=null` removes the party from the queue without seating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistDequeue {
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    #[serde(
        rename = "tableID",
        default,
        deserialize_with = "serde_helpers::nullable_id"
    )]
    pub table_id: Option<i64>,
    #[serde(
        rename = "frontWorkerID",
        default,
        deserialize_with = "serde_helpers::nullable_id"
    )]
    pub front_worker_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(exit_time: Option<i64>) -> WaitlistEntry {
        WaitlistEntry {
            customer_id: 1,
            phone_number: "555-1234".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            join_time: 10_000,
            exit_time,
        }
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(WaitlistPartyEntry {
            entry: entry(None),
            group_size: 4,
        })
        .unwrap();

        assert_eq!(json["customerID"], 1);
        assert_eq!(json["groupSize"], 4);
        assert_eq!(json["phoneNumber"], "555-1234");
        assert!(json["exitTime"].is_null());
    }

    #[test]
    fn test_grouped_null_average() {
        let grouped = WaitlistGrouped {
            average_wait: None,
            waiting: vec![],
            seated: vec![],
        };
        let json = serde_json::to_value(grouped).unwrap();
        assert!(json["Average Wait"].is_null());
        assert!(json["Waiting"].as_array().unwrap().is_empty());
        assert!(json["Seated"].as_array().unwrap().is_empty());
    }
}
