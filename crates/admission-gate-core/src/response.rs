// crates/admission-gate-core/src/response.rs
// ============================================================================
// Module: Response Contract
// Description: Canonical settings and admission response shapes.
// Purpose: Serialize the fixed, versioned response contract the host expects.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The host interprets exactly two response shapes: the settings validation
//! response (`valid`, `message`) and the admission validation response
//! (`accepted`, `message`, `code`, `mutated_object`). Field names are wire
//! contract and must match exactly; `mutated_object` keeps its snake_case
//! name even though the surrounding admission payloads are not case
//! converted. Responses are built through the pure constructors below, which
//! make the accept / reject / accept-with-mutation variants mutually
//! exclusive by construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Settings Response
// ============================================================================

/// Response returned by settings validation.
///
/// # Invariants
/// - `message` is present only when `valid` is false; a valid response
///   serializes `message` as null, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsValidationResponse {
    /// Whether the settings are valid.
    valid: bool,
    /// Rejection reason shown to the end user.
    message: Option<String>,
}

impl SettingsValidationResponse {
    /// Whether the settings were accepted as valid.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// Rejection reason, present only for invalid settings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

// ============================================================================
// SECTION: Admission Response
// ============================================================================

/// Response returned for an admission validation decision.
///
/// # Invariants
/// - `mutated_object` is present only when `accepted` is true.
/// - `message` and `code` are meaningful only when `accepted` is false.
/// - Exactly one of plain accept, accept-with-mutation, or reject is
///   represented; the variants are not independently toggleable flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the admission request is accepted.
    accepted: bool,
    /// Rejection reason shown to the end user.
    message: Option<String>,
    /// Machine-readable rejection code.
    code: Option<i64>,
    /// Replacement object for accept-with-mutation decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    mutated_object: Option<Value>,
}

impl ValidationResponse {
    /// Whether the admission request was accepted.
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.accepted
    }

    /// Rejection reason, meaningful only for rejections.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Machine-readable rejection code, meaningful only for rejections.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// Replacement object, present only for accept-with-mutation decisions.
    #[must_use]
    pub const fn mutated_object(&self) -> Option<&Value> {
        self.mutated_object.as_ref()
    }
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Serializes a fixed-shape response value.
///
/// Response shapes contain only booleans, optional strings, optional
/// integers, and JSON values, so serialization cannot fail. A failure here
/// is a core invariant violation, not a recoverable condition.
#[allow(
    clippy::expect_used,
    reason = "Fixed-shape responses always serialize; a failure is a core invariant violation."
)]
fn encode<T: Serialize>(response: &T) -> String {
    serde_json::to_string(response).expect("fixed-shape response serialization must not fail")
}

// ============================================================================
// SECTION: Settings Response Builders
// ============================================================================

/// Accepts the settings as valid.
///
/// Returns the serialized settings response with no message.
#[must_use]
pub fn accept_settings() -> String {
    encode(&SettingsValidationResponse {
        valid: true,
        message: None,
    })
}

/// Rejects the settings as invalid.
///
/// The message explains the validation failure to the end user.
#[must_use]
pub fn reject_settings(message: Option<String>) -> String {
    encode(&SettingsValidationResponse {
        valid: false,
        message,
    })
}

// ============================================================================
// SECTION: Admission Response Builders
// ============================================================================

/// Accepts the admission request unchanged.
#[must_use]
pub fn accept_request() -> String {
    encode(&ValidationResponse {
        accepted: true,
        message: None,
        code: None,
        mutated_object: None,
    })
}

/// Accepts the admission request while replacing the reviewed object.
///
/// The replacement is carried under the `mutated_object` field, the exact
/// snake_case name the host expects.
#[must_use]
pub fn mutate_request(mutated_object: Value) -> String {
    encode(&ValidationResponse {
        accepted: true,
        message: None,
        code: None,
        mutated_object: Some(mutated_object),
    })
}

/// Rejects the admission request.
///
/// Both the user-facing message and the machine-readable code are optional
/// and serialize as null when absent, never as empty stand-ins.
#[must_use]
pub fn reject_request(message: Option<String>, code: Option<i64>) -> String {
    encode(&ValidationResponse {
        accepted: false,
        message,
        code,
        mutated_object: None,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
