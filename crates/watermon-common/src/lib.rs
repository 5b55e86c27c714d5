//! Watermon Common - shared types used across all watermon components
//!
//! This crate provides the error taxonomy shared by the service and auth
//! layers.

pub mod error;

pub use error::WatermonError;
