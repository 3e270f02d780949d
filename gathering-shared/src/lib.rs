//! # Gathering Shared Library
//!
//! Record types, validation rules and the record store used by the Gathering
//! API server.
//!
//! ## Module Organization
//!
//! - `models`: Users, events and event categories
//! - `validation`: Candidate shapes and the rules they must pass
//! - `store`: The `Storage` trait and its in-memory implementation

pub mod models;
pub mod store;
pub mod validation;

/// Current version of the Gathering shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
