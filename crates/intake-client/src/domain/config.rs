//! Intake client configuration.
//!
//! [`IntakeConfig`] is built once at startup and handed to the
//! [`SubmissionController`](crate::application::SubmissionController) when it
//! is constructed.  Nothing reads the webhook URL from ambient state.
//!
//! The struct doubles as the schema of the optional `intake.toml` file:
//!
//! ```toml
//! webhook_url = "https://hooks.example.org/webhook/astrology"
//! request_timeout_secs = 20
//! log_level = "debug"
//! ```
//!
//! Every field has a serde default, so an empty or partial file is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// All runtime configuration for the intake client.
///
/// # Example
///
/// ```rust
/// use intake_client::domain::IntakeConfig;
///
/// let cfg = IntakeConfig::default();
/// assert!(cfg.webhook_url.is_none());
/// assert!(cfg.request_timeout().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Destination of the webhook POST.
    ///
    /// `None`, a blank string, or the template's placeholder URL all count
    /// as "not configured" and block submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Upper bound on one webhook request, in seconds.
    ///
    /// Absent by default: the request may wait as long as the server takes,
    /// with the submit control disabled the whole time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl IntakeConfig {
    /// The request timeout, if one was configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
