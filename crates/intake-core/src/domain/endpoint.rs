//! The webhook destination and the check that it has really been configured.
//!
//! Deployments start from a template whose webhook URL is a sample n8n
//! address.  Until an operator replaces it, submissions must not be sent
//! there, so [`WebhookEndpoint::resolve`] treats it the same as no URL at all.

use std::fmt;

use thiserror::Error;

/// The sample webhook URL shipped with the form template.
pub const PLACEHOLDER_WEBHOOK_URL: &str =
    "https://malathisampath.app.n8n.cloud/webhook/6fed348e-e948-48b0-8f2f-471e06d72a26";

/// Why an endpoint could not be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EndpointError {
    /// No URL was supplied, or only whitespace.
    #[error("webhook URL is not set")]
    Missing,

    /// The URL is still the template's sample address.
    #[error("webhook URL is still the placeholder address")]
    Placeholder,
}

/// A webhook URL that has passed the configuration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoint(String);

impl WebhookEndpoint {
    /// Checks a configured URL value.
    ///
    /// # Errors
    ///
    /// [`EndpointError::Missing`] for `None` or a blank string, and
    /// [`EndpointError::Placeholder`] when the value contains
    /// [`PLACEHOLDER_WEBHOOK_URL`].
    pub fn resolve(url: Option<&str>) -> Result<Self, EndpointError> {
        let url = url.map(str::trim).unwrap_or_default();
        if url.is_empty() {
            return Err(EndpointError::Missing);
        }
        if url.contains(PLACEHOLDER_WEBHOOK_URL) {
            return Err(EndpointError::Placeholder);
        }
        Ok(Self(url.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebhookEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
