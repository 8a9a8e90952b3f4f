//! SubmitFormUseCase: validate the intake form and forward it to the webhook.
//!
//! [`SubmissionController`] handles one submit interaction from start to
//! finish.  It depends only on two traits, [`FormView`] (the bound form) and
//! [`WebhookTransport`] (the HTTP POST), both injected at construction time,
//! so the whole flow runs in tests without a browser or a network.
//!
//! # Flow
//!
//! ```text
//! idle ──► validating ──► invalid ─────────────────────────► idle
//!                     └─► valid ──► submitting ──► success ──► idle
//!                                              └─► failure ──► idle
//! ```
//!
//! Every path ends in idle with the submit control enabled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use intake_core::{
    EndpointError, FieldName, FormInputs, StatusMessage, SubmissionPayload,
    ValidationResult, WebhookEndpoint,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::events::{SubmitEvent, SubmitHandler};
use crate::domain::IntakeConfig;

// ── Error types ───────────────────────────────────────────────────────────────

/// Failure to deliver the payload to the webhook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The webhook answered with a status outside 200–299.
    #[error("request failed with status {0}")]
    Status(u16),
}

/// Why a submit interaction did not deliver the form.
///
/// None of these are fatal.  Each one is reported to the user through the
/// status line and the controller returns to idle.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// One or more fields are missing or malformed.  The user fixes them.
    #[error("{} field(s) failed validation", .0.error_count())]
    Validation(ValidationResult),

    /// No usable webhook URL.  Only an operator can fix this.
    #[error("webhook endpoint is not configured: {0}")]
    Configuration(#[from] EndpointError),

    /// The POST failed.  The detail is logged, never shown to the user.
    #[error("webhook delivery failed: {0}")]
    Transport(#[from] TransportError),
}

/// Result of one call to [`SubmissionController::handle_submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight; this event was ignored.
    Busy,
    /// The webhook accepted the payload and the form was reset.
    Submitted,
    /// The attempt stopped; see the error for which step.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

// ── Ports ─────────────────────────────────────────────────────────────────────

/// The bound form: handles to every control the controller touches.
///
/// A host builds one of these once and the controller reuses it for every
/// attempt.  Methods take `&self`; implementations use interior mutability.
pub trait FormView: Send + Sync {
    /// Snapshot of every control's current value.
    fn read_inputs(&self) -> FormInputs;

    /// Removes all field error text and highlighting.
    fn clear_field_errors(&self);

    /// Shows `message` in the error slot of `field` and highlights it.
    fn show_field_error(&self, field: FieldName, message: &str);

    /// Replaces the status line.
    fn set_status(&self, status: StatusMessage);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Returns every control to its empty/default state.
    fn reset(&self);
}

/// Sends a payload to the webhook.
///
/// Implementations report the HTTP status they got back; deciding what
/// counts as success is the controller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs `payload` as `application/json` to `endpoint`.
    ///
    /// # Errors
    ///
    /// [`TransportError::Network`] when no response was received.
    async fn post_json(
        &self,
        endpoint: &WebhookEndpoint,
        payload: &SubmissionPayload,
    ) -> Result<u16, TransportError>;
}

// ── Controller ────────────────────────────────────────────────────────────────

/// The validate-and-submit controller for the intake form.
pub struct SubmissionController {
    webhook_url: Option<String>,
    view: Arc<dyn FormView>,
    transport: Arc<dyn WebhookTransport>,
    in_flight: AtomicBool,
}

/// Holds the in-flight flag for the duration of one request.
///
/// Dropping it re-enables the submit control and clears the flag, also when
/// the submit future is cancelled mid-request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
    view: &'a dyn FormView,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.flag.store(false, Ordering::Release);
    }
}

impl SubmissionController {
    /// Creates a controller bound to `view` that posts through `transport`.
    pub fn new(
        config: &IntakeConfig,
        view: Arc<dyn FormView>,
        transport: Arc<dyn WebhookTransport>,
    ) -> Self {
        Self {
            webhook_url: config.webhook_url.clone(),
            view,
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Returns `true` while a webhook request is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates the current form contents and annotates the view.
    ///
    /// Previous field errors are always cleared first, so a corrected field
    /// never keeps a stale message.  Returns `true` iff no field failed.
    pub fn validate_form(&self) -> bool {
        let inputs = self.view.read_inputs();
        self.check_form(&inputs).is_ok()
    }

    /// Clears stale annotations, then builds the payload or annotates every
    /// failing field.
    fn check_form(&self, inputs: &FormInputs) -> Result<SubmissionPayload, ValidationResult> {
        self.view.clear_field_errors();
        SubmissionPayload::build(inputs).map_err(|result| {
            for (field, message) in result.errors() {
                self.view.show_field_error(field, message);
            }
            result
        })
    }

    fn begin_request(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        // Disabled before the first await so a second click cannot slip in.
        self.view.set_submit_enabled(false);
        Some(InFlightGuard {
            flag: &self.in_flight,
            view: self.view.as_ref(),
        })
    }

    /// Handles one submit interaction.
    ///
    /// Always prevents the host's default submit first.  Validation and the
    /// endpoint check run synchronously; only the webhook POST suspends.
    pub async fn handle_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        if self.is_in_flight() {
            warn!(form = event.form_id(), "submission already in flight; ignoring submit");
            return SubmitOutcome::Busy;
        }

        // Step 1: validate.
        let inputs = self.view.read_inputs();
        let payload = match self.check_form(&inputs) {
            Ok(payload) => payload,
            Err(validation) => {
                debug!(errors = validation.error_count(), "form rejected by validation");
                self.view.set_status(StatusMessage::correct_fields());
                return SubmitOutcome::Failed(SubmissionError::Validation(validation));
            }
        };

        // Step 2: endpoint must be configured.  The submit control is left alone.
        let endpoint = match WebhookEndpoint::resolve(self.webhook_url.as_deref()) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                warn!("cannot submit intake form: {e}");
                self.view.set_status(StatusMessage::not_configured());
                return SubmitOutcome::Failed(e.into());
            }
        };

        // Step 3: claim the in-flight slot, then send.
        let Some(guard) = self.begin_request() else {
            warn!(form = event.form_id(), "submission already in flight; ignoring submit");
            return SubmitOutcome::Busy;
        };
        self.view.set_status(StatusMessage::sending());

        info!(%endpoint, "sending intake form to webhook");
        let outcome = match self.deliver(&endpoint, &payload).await {
            Ok(()) => {
                // Step 5: success.
                info!("webhook accepted intake form");
                self.view.set_status(StatusMessage::received());
                self.view.reset();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                // Step 6: failure.  Detail goes to the log only.
                error!("intake form submission failed: {e}");
                self.view.set_status(StatusMessage::send_failed());
                SubmitOutcome::Failed(e.into())
            }
        };

        // Step 7: re-enable the submit control.
        drop(guard);
        outcome
    }

    async fn deliver(
        &self,
        endpoint: &WebhookEndpoint,
        payload: &SubmissionPayload,
    ) -> Result<(), TransportError> {
        let status = self.transport.post_json(endpoint, payload).await?;
        if !(200..300).contains(&status) {
            return Err(TransportError::Status(status));
        }
        Ok(())
    }
}

#[async_trait]
impl SubmitHandler for SubmissionController {
    async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome {
        self.handle_submit(event).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
