//! Test doubles for the view and transport seams.
//!
//! [`RecordingFormView`] stands in for a bound form and records every call
//! the controller makes.  [`ScriptedTransport`] answers webhook requests from
//! a queue of canned results and keeps the JSON bodies it was given.  Neither
//! needs a terminal, a browser, or a network.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use intake_core::{FieldName, FormInputs, StatusMessage, SubmissionPayload, WebhookEndpoint};
use tokio::sync::Notify;

use crate::application::{FormView, TransportError, WebhookTransport};

/// One call made on a [`RecordingFormView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    ReadInputs,
    ClearFieldErrors,
    ShowFieldError(FieldName, String),
    SetStatus(StatusMessage),
    SetSubmitEnabled(bool),
    Reset,
}

#[derive(Debug)]
struct ViewState {
    inputs: FormInputs,
    field_errors: BTreeMap<FieldName, String>,
    status: StatusMessage,
    submit_enabled: bool,
    calls: Vec<ViewCall>,
}

/// A [`FormView`] that keeps its state in memory and records every call.
#[derive(Debug)]
pub struct RecordingFormView {
    state: Mutex<ViewState>,
}

impl RecordingFormView {
    /// Creates a view pre-filled with `inputs` and an enabled submit control.
    pub fn new(inputs: FormInputs) -> Self {
        Self {
            state: Mutex::new(ViewState {
                inputs,
                field_errors: BTreeMap::new(),
                status: StatusMessage::default(),
                submit_enabled: true,
                calls: Vec::new(),
            }),
        }
    }

    /// Replaces the form contents, as if the user edited the controls.
    pub fn set_inputs(&self, inputs: FormInputs) {
        self.state.lock().expect("lock poisoned").inputs = inputs;
    }

    pub fn inputs(&self) -> FormInputs {
        self.state.lock().expect("lock poisoned").inputs.clone()
    }

    pub fn status(&self) -> StatusMessage {
        self.state.lock().expect("lock poisoned").status.clone()
    }

    pub fn submit_enabled(&self) -> bool {
        self.state.lock().expect("lock poisoned").submit_enabled
    }

    pub fn field_error(&self, field: FieldName) -> Option<String> {
        self.state
            .lock()
            .expect("lock poisoned")
            .field_errors
            .get(&field)
            .cloned()
    }

    pub fn field_errors(&self) -> BTreeMap<FieldName, String> {
        self.state.lock().expect("lock poisoned").field_errors.clone()
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.state.lock().expect("lock poisoned").calls.clone()
    }
}

impl FormView for RecordingFormView {
    fn read_inputs(&self) -> FormInputs {
        let mut state = self.state.lock().expect("lock poisoned");
        state.calls.push(ViewCall::ReadInputs);
        state.inputs.clone()
    }

    fn clear_field_errors(&self) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.calls.push(ViewCall::ClearFieldErrors);
        state.field_errors.clear();
    }

    fn show_field_error(&self, field: FieldName, message: &str) {
        let mut state = self.state.lock().expect("lock poisoned");
        state
            .calls
            .push(ViewCall::ShowFieldError(field, message.to_string()));
        state.field_errors.insert(field, message.to_string());
    }

    fn set_status(&self, status: StatusMessage) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.calls.push(ViewCall::SetStatus(status.clone()));
        state.status = status;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.calls.push(ViewCall::SetSubmitEnabled(enabled));
        state.submit_enabled = enabled;
    }

    fn reset(&self) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.calls.push(ViewCall::Reset);
        state.inputs = FormInputs::default();
    }
}

/// A request seen by a [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: serde_json::Value,
}

/// A [`WebhookTransport`] that replays scripted results.
///
/// Each request pops the next result; once the script runs out every request
/// answers `200`.  With a gate set, each request waits until
/// [`ScriptedTransport::release`] is called, which lets tests observe the
/// controller while a request is pending.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<u16, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose requests block until [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    /// Queues the result of the next unanswered request.
    pub fn push_result(&self, result: Result<u16, TransportError>) -> &Self {
        self.script.lock().expect("lock poisoned").push_back(result);
        self
    }

    /// Lets one pending (or the next) gated request proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl WebhookTransport for ScriptedTransport {
    async fn post_json(
        &self,
        endpoint: &WebhookEndpoint,
        payload: &SubmissionPayload,
    ) -> Result<u16, TransportError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| TransportError::Network(format!("unserializable payload: {e}")))?;
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(RecordedRequest {
                url: endpoint.as_str().to_string(),
                body,
            });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.script
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or(Ok(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::build(&FormInputs {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            place_of_birth: "London".to_string(),
            focus_area: "career".to_string(),
            consent: true,
            ..FormInputs::default()
        })
        .expect("valid inputs")
    }

    #[test]
    fn test_recording_view_reset_clears_inputs_only() {
        let view = RecordingFormView::new(FormInputs {
            full_name: "Ada".to_string(),
            ..FormInputs::default()
        });
        view.show_field_error(FieldName::Email, "bad");

        view.reset();

        assert!(view.inputs().is_blank());
        assert_eq!(view.field_error(FieldName::Email).as_deref(), Some("bad"));
        assert_eq!(
            view.calls(),
            vec![
                ViewCall::ShowFieldError(FieldName::Email, "bad".to_string()),
                ViewCall::Reset
            ]
        );
    }

    #[tokio::test]
    async fn test_scripted_transport_replays_then_defaults_to_ok() {
        // Arrange
        let transport = ScriptedTransport::new();
        transport.push_result(Ok(503));
        let endpoint = WebhookEndpoint::resolve(Some("https://hooks.example.org/a")).unwrap();

        // Act
        let first = transport.post_json(&endpoint, &payload()).await;
        let second = transport.post_json(&endpoint, &payload()).await;

        // Assert
        assert_eq!(first, Ok(503));
        assert_eq!(second, Ok(200));
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://hooks.example.org/a");
        assert_eq!(requests[0].body["fullName"], "Ada");
    }
}
