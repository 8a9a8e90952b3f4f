//! Domain entities for the intake form.
//!
//! Everything here is pure: no network, no terminal, no async runtime.  The
//! application layer in `intake-client` reads these types from a view,
//! validates them, and hands the resulting payload to a transport.

/// Form fields and the raw values typed into them.
pub mod form;

/// Required-field and email rules.
pub mod validation;

/// Status line text and severity.
pub mod status;

/// Webhook URL and its configuration check.
pub mod endpoint;

pub use endpoint::{EndpointError, WebhookEndpoint, PLACEHOLDER_WEBHOOK_URL};
pub use form::{FieldName, FormInputs};
pub use status::{Severity, StatusMessage};
pub use validation::{validate, ValidationResult};
