//! Watermon Auth - credential lookup and verification
//!
//! Resolves API keys against the user directory and verifies
//! username/password logins against stored bcrypt hashes.

pub mod model;
pub mod service;

pub use model::User;
