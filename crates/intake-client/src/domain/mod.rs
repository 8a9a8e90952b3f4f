//! Domain layer for intake-client.
//!
//! The form's own entities (fields, validation, payload) live in
//! `intake-core`.  This layer only adds what the client needs on top: its
//! runtime configuration.
//!
//! # What does NOT belong here?
//!
//! - Reading files or environment variables (that is infrastructure)
//! - Anything async or network-bound

pub mod config;

pub use config::IntakeConfig;
