//! Auth domain models

use serde::{Deserialize, Serialize};
use watermon_persistence::entity::users;

/// A user account resolved from the directory, without the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub api_key: String,
    pub floor: String,
}

impl From<users::Model> for User {
    fn from(value: users::Model) -> Self {
        Self {
            id: value.id,
            username: value.username,
            api_key: value.api_key,
            floor: value.floor,
        }
    }
}
