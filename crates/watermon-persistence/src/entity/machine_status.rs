//! Current machine status per floor
//!
//! One row per floor, provisioned alongside the machines themselves. The
//! service only ever updates the status column.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "machine_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub floor: String,
    pub machine_status: String,
    pub gmt_modified: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
