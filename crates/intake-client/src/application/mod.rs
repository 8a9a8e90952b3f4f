//! Application layer for intake-client.
//!
//! The application layer orchestrates one submit interaction: it knows
//! *what* to do, but delegates *how* to the infrastructure layer through the
//! [`FormView`], [`WebhookTransport`], and [`FormHost`] traits.
//!
//! # What does NOT belong here?
//!
//! - HTTP clients or sockets (that is infrastructure)
//! - Terminal rendering (that is infrastructure)
//! - Reading config files or CLI arguments (that is `main.rs`)

pub mod events;
pub mod submit_form;

pub use events::{FormHost, SubmitEvent, SubmitHandler, FORM_ID};
pub use submit_form::{
    FormView, SubmissionController, SubmissionError, SubmitOutcome, TransportError,
    WebhookTransport,
};
