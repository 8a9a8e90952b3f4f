//! JSON body posted to the webhook.
//!
//! The body is a flat object with camelCase keys:
//!
//! ```json
//! {
//!   "fullName": "Ada Lovelace",
//!   "email": "ada@example.com",
//!   "dateOfBirth": "1815-12-10",
//!   "timeOfBirth": null,
//!   "placeOfBirth": "London",
//!   "gender": null,
//!   "focusArea": "career",
//!   "extraContext": null,
//!   "source": "astrology-prediction-site-v1"
//! }
//! ```
//!
//! Optional fields left empty are sent as `null`, never as `""`, so the
//! workflow behind the webhook can tell "not given" from "given".

use serde::Serialize;

use crate::domain::form::FormInputs;
use crate::domain::validation::{validate, ValidationResult};

/// Identifies this form (and its revision) to the webhook workflow.
pub const SOURCE_TAG: &str = "astrology-prediction-site-v1";

/// Request body for one submission.
///
/// Only [`SubmissionPayload::build`] creates one, and it refuses to unless
/// the inputs validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    full_name: String,
    email: String,
    date_of_birth: String,
    time_of_birth: Option<String>,
    place_of_birth: String,
    gender: Option<String>,
    focus_area: String,
    extra_context: Option<String>,
    source: &'static str,
}

impl SubmissionPayload {
    /// Builds the payload from a validated form snapshot.
    ///
    /// Text fields are trimmed; optional fields that are empty after trimming
    /// become `None`.
    ///
    /// # Errors
    ///
    /// Returns the failing [`ValidationResult`] if any field is invalid.
    pub fn build(inputs: &FormInputs) -> Result<Self, ValidationResult> {
        let validation = validate(inputs);
        if !validation.is_valid() {
            return Err(validation);
        }

        Ok(Self {
            full_name: inputs.full_name.trim().to_string(),
            email: inputs.email.trim().to_string(),
            date_of_birth: inputs.date_of_birth.trim().to_string(),
            time_of_birth: optional(&inputs.time_of_birth),
            place_of_birth: inputs.place_of_birth.trim().to_string(),
            gender: optional(&inputs.gender),
            focus_area: inputs.focus_area.trim().to_string(),
            extra_context: optional(&inputs.extra_context),
            source: SOURCE_TAG,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn time_of_birth(&self) -> Option<&str> {
        self.time_of_birth.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn extra_context(&self) -> Option<&str> {
        self.extra_context.as_deref()
    }

    pub fn source(&self) -> &'static str {
        self.source
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
