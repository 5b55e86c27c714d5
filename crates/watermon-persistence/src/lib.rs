//! Watermon Persistence - database entities for the watermon store
//!
//! This crate provides the SeaORM entity definitions for the four tables
//! backing the service: the user directory, the event history, the current
//! machine status per floor, and the appended machine detail log.

pub mod entity;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
