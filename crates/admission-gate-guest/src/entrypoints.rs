// crates/admission-gate-guest/src/entrypoints.rs
// ============================================================================
// Module: Guest Entrypoints
// Description: Bodies of the guest functions the host invokes.
// Purpose: Expose thin wrappers over the core settings and request contract.
// Dependencies: admission-gate-core, serde
// ============================================================================

//! ## Overview
//! The host invokes three guest functions: `protocol_version`,
//! `validate_settings`, and `validate`. The entrypoint bodies here are thin
//! wrappers over the core contract; a policy registers them with whatever
//! waPC runtime binding it is built against. Each invocation runs to
//! completion synchronously and holds no state across calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use admission_gate_core::SettingsDecodeError;
use admission_gate_core::SettingsValidator;
use admission_gate_core::Validatable;
use admission_gate_core::ValidationRequest;
use serde::de::DeserializeOwned;

// ============================================================================
// SECTION: Protocol Version
// ============================================================================

/// Protocol version label returned to the host, pre-serialized as JSON.
pub const PROTOCOL_VERSION: &str = "\"v1\"";

/// Body of the `protocol_version` guest function.
///
/// Returns the fixed protocol version literal; the input payload is ignored.
#[must_use]
pub fn protocol_version(_payload: &str) -> String {
    PROTOCOL_VERSION.to_string()
}

// ============================================================================
// SECTION: Settings Validation
// ============================================================================

/// Body of the `validate_settings` guest function for settings type `S`.
///
/// Decodes and validates the payload, returning the serialized settings
/// response. Every failure is data: the function always returns a
/// well-formed response string.
#[must_use]
pub fn validate_settings<S: Validatable + DeserializeOwned>(payload: &str) -> String {
    SettingsValidator::<S>::new().validate(payload)
}

// ============================================================================
// SECTION: Admission Validation
// ============================================================================

/// Decodes the `validate` guest function payload into the typed envelope.
///
/// The policy's business logic consumes the envelope and produces its
/// decision through the core response builders.
///
/// # Errors
///
/// Returns [`SettingsDecodeError`] when the payload is malformed or the
/// embedded settings are absent or mistyped.
pub fn validation_request<S: DeserializeOwned>(
    payload: &str,
) -> Result<ValidationRequest<S>, SettingsDecodeError> {
    ValidationRequest::new(payload)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
