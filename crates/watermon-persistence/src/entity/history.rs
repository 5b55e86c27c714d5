//! History log entity
//!
//! Append-only record of reported status events. Rows are never modified
//! or deleted once inserted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u64,
    /// Client-supplied timestamp, stored opaquely
    pub date_time: String,
    pub machine_status: String,
    pub floor: String,
    /// Submitting user; a soft reference stamped at write time
    pub user_id: u64,
    pub gmt_create: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
