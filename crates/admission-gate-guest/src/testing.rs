// crates/admission-gate-guest/src/testing.rs
// ============================================================================
// Module: Test Payload Helpers
// Description: Builders for validation payloads used in policy unit tests.
// Purpose: Let policies exercise their `validate` logic without a host.
// Dependencies: admission-gate-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Policy unit tests need the same `{"settings": …, "request": …}` envelope
//! the host delivers to the `validate` guest function. The helper here
//! assembles that envelope from typed settings and a raw admission request
//! so tests stay close to the real wire shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while assembling a validation payload.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The admission request text is not valid JSON.
    #[error("invalid request JSON: {0}")]
    InvalidRequest(String),
    /// The settings cannot be represented as JSON.
    #[error("settings are not representable as JSON: {0}")]
    InvalidSettings(String),
}

// ============================================================================
// SECTION: Payload Builder
// ============================================================================

/// Builds the validation payload for a policy's `validate` function.
///
/// # Errors
///
/// Returns [`PayloadError`] when the request text is not valid JSON or the
/// settings cannot be serialized.
pub fn validation_payload<S: Serialize>(settings: &S, request: &str) -> Result<String, PayloadError> {
    let request: Value =
        serde_json::from_str(request).map_err(|err| PayloadError::InvalidRequest(err.to_string()))?;
    let settings =
        serde_json::to_value(settings).map_err(|err| PayloadError::InvalidSettings(err.to_string()))?;

    Ok(json!({
        "settings": settings,
        "request": request,
    })
    .to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
