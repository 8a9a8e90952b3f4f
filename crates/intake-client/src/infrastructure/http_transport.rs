//! Webhook transport backed by `reqwest`.
//!
//! Sends exactly one `POST` per call with the payload serialized as the JSON
//! body.  No retries: a failed request is reported and the user decides
//! whether to submit again.

use std::time::Duration;

use async_trait::async_trait;
use intake_core::{SubmissionPayload, WebhookEndpoint};
use tracing::debug;

use crate::application::{TransportError, WebhookTransport};

/// Posts submissions over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport.
    ///
    /// With `timeout` set to `None` a request may wait indefinitely for the
    /// webhook to answer.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint: &WebhookEndpoint,
        payload: &SubmissionPayload,
    ) -> Result<u16, TransportError> {
        // `.json()` serializes the body and sets `Content-Type: application/json`.
        let response = self
            .client
            .post(endpoint.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, "webhook responded");
        Ok(status)
    }
}
