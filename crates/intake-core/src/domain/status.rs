//! The status line shown under the submit button.
//!
//! Only the latest [`StatusMessage`] is ever visible; each new one replaces
//! the previous text and style.

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Progress text, rendered without emphasis.
    #[default]
    Neutral,
    Success,
    Error,
}

impl Severity {
    /// Style class applied to the status region, if any.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Severity::Neutral => None,
            Severity::Success => Some("status--success"),
            Severity::Error => Some("status--error"),
        }
    }
}

pub const MSG_CORRECT_FIELDS: &str = "Please correct the highlighted fields and try again.";
pub const MSG_NOT_CONFIGURED: &str =
    "Webhook URL is not configured. Please set the webhook URL in the intake configuration.";
pub const MSG_SENDING: &str = "Sending your details securely…";
pub const MSG_RECEIVED: &str = "Thank you! Your details were received. You will receive an email once your astrology insight has been generated.";
pub const MSG_SEND_FAILED: &str =
    "Something went wrong while sending your request. Please try again in a moment.";

/// Text plus severity for the status region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Neutral)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// Shown when one or more fields failed validation.
    pub fn correct_fields() -> Self {
        Self::error(MSG_CORRECT_FIELDS)
    }

    /// Shown when no real webhook endpoint has been configured.
    pub fn not_configured() -> Self {
        Self::error(MSG_NOT_CONFIGURED)
    }

    /// Shown while the request is in flight.
    pub fn sending() -> Self {
        Self::neutral(MSG_SENDING)
    }

    /// Shown after the webhook accepted the submission.
    pub fn received() -> Self {
        Self::success(MSG_RECEIVED)
    }

    /// Shown after any transport failure.  Carries no error detail.
    pub fn send_failed() -> Self {
        Self::error(MSG_SEND_FAILED)
    }
}
