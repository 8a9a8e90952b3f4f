//! Submit events and the host seam that delivers them.
//!
//! A host (a browser page, a terminal, a test) owns the real form.  It
//! exposes [`FormHost::on_submit`] so the controller can be registered
//! without knowing anything about the host, and it fires one
//! [`SubmitEvent`] per submit interaction once the form is ready.

use std::sync::Arc;

use async_trait::async_trait;

use super::submit_form::SubmitOutcome;

/// Element id of the intake form.
pub const FORM_ID: &str = "astrology-form";

/// One submit interaction on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    form_id: String,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            default_prevented: false,
        }
    }

    /// Id of the form that was submitted.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Stops the host from performing its own submit (page navigation in a
    /// browser).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something that reacts to submit events.
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn on_submit(&self, event: &mut SubmitEvent) -> SubmitOutcome;
}

/// A host that owns a form and delivers its submit events.
pub trait FormHost {
    /// Registers `handler` for submit events, replacing any previous one.
    fn on_submit(&self, handler: Arc<dyn SubmitHandler>);
}
