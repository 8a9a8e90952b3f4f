//! Integration tests for the rules that gate a webhook submission.
//!
//! These go through the crate's public re-exports only, the same way
//! `intake-client` uses them.

use intake_core::{validate, FieldName, FormInputs, SubmissionPayload, WebhookEndpoint};

fn complete_form() -> FormInputs {
    FormInputs {
        full_name: "Grace Hopper".to_string(),
        email: "grace@navy.example.mil".to_string(),
        date_of_birth: "1906-12-09".to_string(),
        time_of_birth: "09:30".to_string(),
        place_of_birth: "New York".to_string(),
        gender: String::new(),
        focus_area: "relationships".to_string(),
        extra_context: String::new(),
        consent: true,
    }
}

#[test]
fn test_each_required_field_blocks_the_payload_on_its_own() {
    for field in FieldName::ALL.into_iter().filter(|f| f.is_required()) {
        // Arrange: whitespace in exactly one required field.
        let mut inputs = complete_form();
        match field {
            FieldName::FullName => inputs.full_name = " ".to_string(),
            FieldName::Email => inputs.email = "  ".to_string(),
            FieldName::DateOfBirth => inputs.date_of_birth = "\t".to_string(),
            FieldName::PlaceOfBirth => inputs.place_of_birth = "\t".to_string(),
            FieldName::FocusArea => inputs.focus_area = "  ".to_string(),
            FieldName::Consent => inputs.consent = false,
            _ => unreachable!("optional field {field}"),
        }

        // Act
        let result = validate(&inputs);

        // Assert
        assert!(result.error_for(field).is_some(), "{field} must fail");
        assert_eq!(result.error_count(), 1, "only {field} should fail");
        assert!(SubmissionPayload::build(&inputs).is_err());
    }
}

#[test]
fn test_complete_form_produces_payload_with_partial_optionals() {
    let payload = SubmissionPayload::build(&complete_form()).expect("valid form");
    let body = serde_json::to_value(&payload).unwrap();

    assert_eq!(body["timeOfBirth"], "09:30");
    assert!(body["gender"].is_null());
    assert!(body["extraContext"].is_null());
}

#[test]
fn test_endpoint_check_is_independent_of_form_validity() {
    assert!(WebhookEndpoint::resolve(Some("")).is_err());
    assert!(WebhookEndpoint::resolve(Some("https://hooks.example.org/x")).is_ok());
}
