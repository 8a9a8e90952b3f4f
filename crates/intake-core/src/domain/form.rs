//! Intake form fields and the values a user typed into them.
//!
//! [`FormInputs`] is a snapshot of the form at the moment the user pressed
//! submit.  It holds the raw text of every control exactly as the host read
//! it; trimming happens in the validator and the payload builder, never here,
//! so the snapshot can be shown back to the user unchanged after a failed
//! attempt.

use std::fmt;

/// One control on the intake form.
///
/// The variant order matches the visual order of the form, which is also the
/// order field errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    DateOfBirth,
    TimeOfBirth,
    PlaceOfBirth,
    Gender,
    FocusArea,
    ExtraContext,
    Consent,
}

impl FieldName {
    /// Every field, in form order.
    pub const ALL: [FieldName; 9] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::DateOfBirth,
        FieldName::TimeOfBirth,
        FieldName::PlaceOfBirth,
        FieldName::Gender,
        FieldName::FocusArea,
        FieldName::ExtraContext,
        FieldName::Consent,
    ];

    /// The element id of the control, also used as the key of its error slot.
    pub fn id(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::TimeOfBirth => "timeOfBirth",
            FieldName::PlaceOfBirth => "placeOfBirth",
            FieldName::Gender => "gender",
            FieldName::FocusArea => "focusArea",
            FieldName::ExtraContext => "extraContext",
            FieldName::Consent => "consent",
        }
    }

    /// Returns `true` for fields the user must fill in before submitting.
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            FieldName::TimeOfBirth | FieldName::Gender | FieldName::ExtraContext
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw values of every control on the form.
///
/// `Default` is the reset state: all text empty and the consent box unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub full_name: String,
    pub email: String,
    /// Date input value, e.g. `1990-04-12`.
    pub date_of_birth: String,
    /// Time input value, e.g. `06:45`.  Optional.
    pub time_of_birth: String,
    pub place_of_birth: String,
    /// Select value.  Optional.
    pub gender: String,
    /// Select value; the empty option means "not chosen".
    pub focus_area: String,
    /// Free text.  Optional.
    pub extra_context: String,
    /// The guidance disclaimer checkbox.
    pub consent: bool,
}

impl FormInputs {
    /// Returns the text value of a field, or `None` for the consent checkbox.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::TimeOfBirth => &self.time_of_birth,
            FieldName::PlaceOfBirth => &self.place_of_birth,
            FieldName::Gender => &self.gender,
            FieldName::FocusArea => &self.focus_area,
            FieldName::ExtraContext => &self.extra_context,
            FieldName::Consent => return None,
        };
        Some(value.as_str())
    }

    /// Returns `true` when every field is in its reset state.
    pub fn is_blank(&self) -> bool {
        *self == FormInputs::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
