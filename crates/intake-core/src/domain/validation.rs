//! Field validation rules for the intake form.
//!
//! [`validate`] is a pure function: it reads a [`FormInputs`] snapshot and
//! returns a fresh [`ValidationResult`] every time.  Nothing is carried over
//! between attempts, so a field the user has corrected never keeps a stale
//! error.  Showing the errors on screen is the caller's job.
//!
//! # Rules
//!
//! | Field        | Rule                                              |
//! |--------------|---------------------------------------------------|
//! | fullName     | non-empty after trimming                          |
//! | email        | non-empty after trimming, then [`EMAIL_PATTERN`]  |
//! | dateOfBirth  | non-empty after trimming                          |
//! | placeOfBirth | non-empty after trimming                          |
//! | focusArea    | non-empty after trimming                          |
//! | consent      | checked                                           |
//!
//! `timeOfBirth`, `gender`, and `extraContext` are optional and never fail.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::form::{FieldName, FormInputs};

/// A deliberately loose `local@domain.tld` shape check.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MSG_FULL_NAME_REQUIRED: &str = "Please enter your full name.";
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_DATE_OF_BIRTH_REQUIRED: &str = "Please provide your date of birth.";
pub const MSG_PLACE_OF_BIRTH_REQUIRED: &str = "Please enter your place of birth.";
pub const MSG_FOCUS_AREA_REQUIRED: &str = "Please choose an area of focus.";
pub const MSG_CONSENT_REQUIRED: &str =
    "You must acknowledge the guidance disclaimer to continue.";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // EMAIL_PATTERN is a literal known to compile.
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Returns `true` if `email` (already trimmed) has a `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Required text fields other than email, which also has a shape check.
const REQUIRED_TEXT: [(FieldName, &str); 4] = [
    (FieldName::FullName, MSG_FULL_NAME_REQUIRED),
    (FieldName::DateOfBirth, MSG_DATE_OF_BIRTH_REQUIRED),
    (FieldName::PlaceOfBirth, MSG_PLACE_OF_BIRTH_REQUIRED),
    (FieldName::FocusArea, MSG_FOCUS_AREA_REQUIRED),
];

/// Outcome of validating one submission attempt.
///
/// Holds at most one message per field.  The result is valid iff it holds
/// no messages at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    /// Returns `true` when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message recorded for `field`, if it failed.
    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Failing fields and their messages, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn reject(&mut self, field: FieldName, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Validates every field of `inputs`.
///
/// All rules run on every call; validation never stops at the first failure,
/// so the user sees every problem at once.
pub fn validate(inputs: &FormInputs) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (field, message) in REQUIRED_TEXT {
        if inputs.text(field).unwrap_or_default().trim().is_empty() {
            result.reject(field, message);
        }
    }

    let email = inputs.email.trim();
    if email.is_empty() {
        result.reject(FieldName::Email, MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        result.reject(FieldName::Email, MSG_EMAIL_INVALID);
    }

    if !inputs.consent {
        result.reject(FieldName::Consent, MSG_CONSENT_REQUIRED);
    }

    debug!(errors = result.error_count(), "validated intake form");
    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
