//! # intake-core
//!
//! Shared library for the astrology intake form: the form's fields, the rules
//! that decide whether a submission may be sent, the JSON body posted to the
//! webhook, and the status messages shown to the user.
//!
//! It has no dependency on a network client, a terminal, or an async runtime,
//! so every rule here can be tested without any host at all.
//!
//! - **`domain`** – Form fields, validation, status messages, and the
//!   webhook endpoint check.
//!
//! - **`protocol`** – The webhook request body ([`SubmissionPayload`]).

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `intake_core::FormInputs` instead of `intake_core::domain::form::FormInputs`.
pub use domain::endpoint::{EndpointError, WebhookEndpoint, PLACEHOLDER_WEBHOOK_URL};
pub use domain::form::{FieldName, FormInputs};
pub use domain::status::{Severity, StatusMessage};
pub use domain::validation::{validate, ValidationResult};
pub use protocol::payload::{SubmissionPayload, SOURCE_TAG};
