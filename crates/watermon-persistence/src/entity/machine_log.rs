//! Machine detail log entity
//!
//! Append-only snapshots submitted by the detail endpoint.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machine_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u64,
    /// Client-supplied date, stored opaquely
    pub date: String,
    pub water_filled: f64,
    pub machine_status: String,
    /// Submitting user; a soft reference stamped at write time
    pub user_id: u64,
    pub gmt_create: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
