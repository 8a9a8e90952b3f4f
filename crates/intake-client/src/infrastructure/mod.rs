//! Infrastructure layer for intake-client.
//!
//! Everything that touches the outside world lives here: the HTTP client
//! that posts to the webhook, the terminal host that owns the form, and the
//! TOML config file.
//!
//! # What does NOT belong here?
//!
//! - Validation rules (that is `intake-core`)
//! - Deciding what to show the user after each step (that is the
//!   application layer)

pub mod console_form;
pub mod http_transport;
pub mod mock;
pub mod storage;

pub use console_form::ConsoleForm;
pub use http_transport::ReqwestTransport;
pub use storage::{load_config, ConfigError};
