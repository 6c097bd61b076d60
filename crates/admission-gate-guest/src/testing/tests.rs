// crates/admission-gate-guest/src/testing/tests.rs
// ============================================================================
// Module: Test Payload Helper Tests
// Description: Unit tests for the validation payload builder.
// Purpose: Validate envelope shape and error reporting.
// Dependencies: admission-gate-guest, admission-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Validates that the payload builder assembles the same envelope the host
//! delivers, and that malformed inputs surface as distinct errors.

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

use std::collections::BTreeMap;

use admission_gate_core::ValidationRequest;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use super::PayloadError;
use super::validation_payload;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Settings requiring a label on every admitted object.
#[derive(Debug, Serialize, Deserialize)]
struct LabelSettings {
    /// Label key that must be present.
    required_label: String,
}

// ============================================================================
// SECTION: Builder Tests
// ============================================================================

#[test]
fn payload_wraps_settings_and_request() {
    let settings = LabelSettings {
        required_label: "owner".to_string(),
    };
    let payload =
        validation_payload(&settings, "{\"uid\": \"705ab4f5\"}").expect("build payload");

    let envelope: serde_json::Value = serde_json::from_str(&payload).expect("valid JSON");
    assert_eq!(envelope["settings"]["required_label"], json!("owner"));
    assert_eq!(envelope["request"]["uid"], json!("705ab4f5"));
}

#[test]
fn payload_round_trips_through_the_typed_envelope() {
    let settings = LabelSettings {
        required_label: "owner".to_string(),
    };
    let request = json!({
        "operation": "CREATE",
        "object": {"metadata": {"labels": {"owner": "team-a"}}},
    })
    .to_string();
    let payload = validation_payload(&settings, &request).expect("build payload");

    let envelope: ValidationRequest<LabelSettings> =
        ValidationRequest::new(&payload).expect("decode envelope");
    assert_eq!(envelope.settings.required_label, "owner");
    assert_eq!(
        envelope.request["object"]["metadata"]["labels"]["owner"],
        json!("team-a")
    );
}

// ============================================================================
// SECTION: Error Tests
// ============================================================================

#[test]
fn malformed_request_text_is_rejected() {
    let settings = LabelSettings {
        required_label: "owner".to_string(),
    };
    let err = validation_payload(&settings, "not json").expect_err("invalid request");
    assert!(matches!(err, PayloadError::InvalidRequest(_)));
    assert!(err.to_string().starts_with("invalid request JSON:"));
}

#[test]
fn unrepresentable_settings_are_rejected() {
    let mut weird: BTreeMap<(u8, u8), u32> = BTreeMap::new();
    weird.insert((1, 2), 3);
    let err = validation_payload(&weird, "{}").expect_err("invalid settings");
    assert!(matches!(err, PayloadError::InvalidSettings(_)));
}
