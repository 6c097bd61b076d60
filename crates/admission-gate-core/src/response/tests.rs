// crates/admission-gate-core/src/response/tests.rs
// ============================================================================
// Module: Response Contract Tests
// Description: Unit tests for the canonical response builders.
// Purpose: Validate exact wire shapes and builder mutual exclusion.
// Dependencies: admission-gate-core
// ============================================================================

//! ## Overview
//! Validates that the response builders produce the exact field names and
//! null handling the host contract requires, and that the response variants
//! stay mutually exclusive.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use super::SettingsValidationResponse;
use super::ValidationResponse;
use super::accept_request;
use super::accept_settings;
use super::mutate_request;
use super::reject_request;
use super::reject_settings;

// ============================================================================
// SECTION: Settings Response Tests
// ============================================================================

#[test]
fn accept_settings_serializes_null_message() {
    assert_eq!(accept_settings(), "{\"valid\":true,\"message\":null}");
}

#[test]
fn reject_settings_preserves_message() {
    let response: Value =
        serde_json::from_str(&reject_settings(Some("bad settings".to_string()))).expect("json");
    assert_eq!(response, json!({"valid": false, "message": "bad settings"}));
}

#[test]
fn reject_settings_without_message_serializes_null() {
    let response: Value = serde_json::from_str(&reject_settings(None)).expect("json");
    assert_eq!(response, json!({"valid": false, "message": null}));
}

#[test]
fn settings_response_round_trips_through_accessors() {
    let response: SettingsValidationResponse =
        serde_json::from_str(&reject_settings(Some("why".to_string()))).expect("json");
    assert!(!response.valid());
    assert_eq!(response.message(), Some("why"));
}

// ============================================================================
// SECTION: Admission Response Tests
// ============================================================================

#[test]
fn accept_request_is_idempotent_and_exact() {
    let expected = "{\"accepted\":true,\"message\":null,\"code\":null}";
    assert_eq!(accept_request(), expected);
    assert_eq!(accept_request(), expected);
}

#[test]
fn accept_request_omits_mutated_object() {
    let response: Value = serde_json::from_str(&accept_request()).expect("json");
    let object = response.as_object().expect("object");
    assert!(!object.contains_key("mutated_object"));
}

#[test]
fn mutate_request_round_trips_nested_object() {
    let mutated = json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "spec": {"replicas": 3, "containers": [{"name": "web"}]}
    });
    let response: Value = serde_json::from_str(&mutate_request(mutated.clone())).expect("json");
    assert_eq!(response["accepted"], Value::Bool(true));
    assert_eq!(response["message"], Value::Null);
    assert_eq!(response["code"], Value::Null);
    assert_eq!(response["mutated_object"], mutated);
}

#[test]
fn mutate_request_carries_scalar_and_null_values() {
    for mutated in [Value::Null, json!(true), json!(42), json!("name"), json!([1, 2, 3])] {
        let response: Value =
            serde_json::from_str(&mutate_request(mutated.clone())).expect("json");
        assert_eq!(response["mutated_object"], mutated);
        assert_eq!(response["accepted"], Value::Bool(true));
    }
}

#[test]
fn mutate_request_uses_snake_case_field_name() {
    let raw = mutate_request(json!({"replicas": 3}));
    assert!(raw.contains("\"mutated_object\":{\"replicas\":3}"));
    assert!(!raw.contains("mutatedObject"));
}

#[test]
fn reject_request_preserves_message_and_code() {
    let raw = reject_request(Some("privileged containers are not allowed".to_string()), Some(403));
    let response: Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        response,
        json!({
            "accepted": false,
            "message": "privileged containers are not allowed",
            "code": 403
        })
    );
}

#[test]
fn reject_request_serializes_absent_fields_as_null() {
    let response: Value = serde_json::from_str(&reject_request(None, None)).expect("json");
    assert_eq!(response, json!({"accepted": false, "message": null, "code": null}));
}

#[test]
fn reject_request_never_carries_a_mutated_object() {
    let raw = reject_request(Some("no".to_string()), Some(400));
    assert!(!raw.contains("mutated_object"));
}

#[test]
fn admission_response_round_trips_through_accessors() {
    let response: ValidationResponse =
        serde_json::from_str(&mutate_request(json!({"replicas": 3}))).expect("json");
    assert!(response.accepted());
    assert_eq!(response.message(), None);
    assert_eq!(response.code(), None);
    assert_eq!(response.mutated_object(), Some(&json!({"replicas": 3})));
}
