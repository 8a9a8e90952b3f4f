//! Terminal host for the intake form.
//!
//! [`ConsoleForm`] plays the part a web page plays in a browser: it owns the
//! form values, renders field errors and the status line, and delivers
//! submit events to whatever handler was registered through
//! [`FormHost::on_submit`].
//!
//! Output is line-oriented so it reads well in a terminal and in logs:
//!
//! ```text
//!   ! email: Please enter a valid email address.
//! [status--error] Please correct the highlighted fields and try again.
//! ```
//!
//! Like a page that wires its handler on load, the form drops submit events
//! until [`ConsoleForm::mark_ready`] has been called.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use intake_core::{FieldName, FormInputs, StatusMessage};
use tracing::{debug, warn};

use crate::application::{
    FormHost, FormView, SubmitEvent, SubmitHandler, SubmitOutcome, FORM_ID,
};

struct FormState {
    inputs: FormInputs,
    field_errors: BTreeMap<FieldName, String>,
    status: StatusMessage,
    submit_enabled: bool,
}

/// A form rendered to a [`Write`] sink.
pub struct ConsoleForm<W> {
    state: Mutex<FormState>,
    out: Mutex<W>,
    handler: Mutex<Option<Arc<dyn SubmitHandler>>>,
    ready: AtomicBool,
}

impl<W: Write + Send> ConsoleForm<W> {
    /// Creates a form pre-filled with `inputs` that renders into `out`.
    pub fn new(inputs: FormInputs, out: W) -> Self {
        Self {
            state: Mutex::new(FormState {
                inputs,
                field_errors: BTreeMap::new(),
                status: StatusMessage::default(),
                submit_enabled: true,
            }),
            out: Mutex::new(out),
            handler: Mutex::new(None),
            ready: AtomicBool::new(false),
        }
    }

    /// Signals that the form is fully set up; submit events flow from now on.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fires one submit event at the registered handler.
    ///
    /// Returns `None` when the event was dropped: the form is not ready yet,
    /// or no handler is registered.
    pub async fn submit(&self) -> Option<SubmitOutcome> {
        if !self.ready.load(Ordering::Acquire) {
            debug!("submit before form was ready; dropped");
            return None;
        }
        // Clone the handler out so no lock is held across the await.
        let handler = self.handler.lock().expect("lock poisoned").clone();
        let Some(handler) = handler else {
            debug!("submit with no handler registered; dropped");
            return None;
        };
        let mut event = SubmitEvent::new(FORM_ID);
        Some(handler.on_submit(&mut event).await)
    }

    pub fn inputs(&self) -> FormInputs {
        self.state.lock().expect("lock poisoned").inputs.clone()
    }

    pub fn status(&self) -> StatusMessage {
        self.state.lock().expect("lock poisoned").status.clone()
    }

    pub fn field_error(&self, field: FieldName) -> Option<String> {
        self.state
            .lock()
            .expect("lock poisoned")
            .field_errors
            .get(&field)
            .cloned()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state.lock().expect("lock poisoned").submit_enabled
    }

    fn render(&self, line: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().expect("lock poisoned");
        if let Err(e) = writeln!(out, "{line}") {
            warn!("failed to render form output: {e}");
        }
    }
}

impl ConsoleForm<Vec<u8>> {
    /// Everything rendered so far.
    pub fn rendered(&self) -> String {
        String::from_utf8_lossy(&self.out.lock().expect("lock poisoned")).into_owned()
    }
}

impl<W: Write + Send> FormView for ConsoleForm<W> {
    fn read_inputs(&self) -> FormInputs {
        self.inputs()
    }

    fn clear_field_errors(&self) {
        self.state.lock().expect("lock poisoned").field_errors.clear();
    }

    fn show_field_error(&self, field: FieldName, message: &str) {
        self.state
            .lock()
            .expect("lock poisoned")
            .field_errors
            .insert(field, message.to_string());
        self.render(format_args!("  ! {}: {}", field.id(), message));
    }

    fn set_status(&self, status: StatusMessage) {
        let class = status.severity.css_class().unwrap_or("status");
        self.render(format_args!("[{class}] {}", status.text));
        self.state.lock().expect("lock poisoned").status = status;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        debug!(enabled, "submit control");
        self.state.lock().expect("lock poisoned").submit_enabled = enabled;
    }

    fn reset(&self) {
        debug!("form reset");
        self.state.lock().expect("lock poisoned").inputs = FormInputs::default();
    }
}

impl<W: Write + Send> FormHost for ConsoleForm<W> {
    fn on_submit(&self, handler: Arc<dyn SubmitHandler>) {
        *self.handler.lock().expect("lock poisoned") = Some(handler);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
