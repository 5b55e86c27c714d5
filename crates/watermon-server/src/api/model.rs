//! Wire models for the HTTP surface

use serde::{Deserialize, Serialize};
use watermon_persistence::entity::{history, machine_log};

/// Response body for the user-info endpoint. Capitalized field names keep
/// the wire contract of the service this replaces.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "API")]
    pub api: String,
    #[serde(rename = "Floor")]
    pub floor: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInfo {
    pub id: u64,
    pub date_time: String,
    pub machine_status: String,
    pub floor: String,
    pub user_id: u64,
}

impl From<history::Model> for HistoryInfo {
    fn from(value: history::Model) -> Self {
        Self {
            id: value.id,
            date_time: value.date_time,
            machine_status: value.machine_status,
            floor: value.floor,
            user_id: value.user_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDetailInfo {
    pub id: u64,
    pub date: String,
    pub water_filled: f64,
    pub machine_status: String,
    pub user_id: u64,
}

impl From<machine_log::Model> for MachineDetailInfo {
    fn from(value: machine_log::Model) -> Self {
        Self {
            id: value.id,
            date: value.date,
            water_filled: value.water_filled,
            machine_status: value.machine_status,
            user_id: value.user_id,
        }
    }
}
