//! User directory entity
//!
//! Accounts are provisioned out-of-band; the service never creates,
//! updates, or deletes them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u64,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt hash, never the cleartext
    pub password: String,
    /// Static bearer credential presented on every write
    #[sea_orm(unique)]
    pub api_key: String,
    /// Floor this user manages
    pub floor: String,
    pub gmt_create: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
