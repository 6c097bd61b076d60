// crates/admission-gate-core/src/request.rs
// ============================================================================
// Module: Validation Request Envelope
// Description: Admission request envelope with typed settings.
// Purpose: Decode the settings half of a validation payload, leaving the
// reviewed object as a generic JSON value.
// Dependencies: crate::settings, serde, serde_json
// ============================================================================

//! ## Overview
//! The `validate` guest function receives an envelope combining the policy
//! settings with the admission request under review. Settings are a hard
//! requirement and decode into the policy's typed settings structure; the
//! object under review varies per resource kind and therefore stays a
//! generic [`serde_json::Value`] for the policy's business logic to inspect.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::settings::SettingsDecodeError;
use crate::settings::decode_settings;

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Admission validation request envelope.
///
/// # Invariants
/// - `settings` is always present and decodable; absence or type mismatch is
///   a hard decode failure, not a validation failure.
/// - The envelope lives for a single guest invocation; nothing is shared
///   across calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRequest<S> {
    /// Policy settings decoded from the envelope.
    pub settings: S,
    /// Admission request under review, kept as a generic JSON value.
    #[serde(default)]
    pub request: Value,
}

impl<S: DeserializeOwned> ValidationRequest<S> {
    /// Decodes a validation payload into the typed envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDecodeError`] when the payload is malformed or the
    /// embedded settings are absent or mistyped.
    pub fn new(payload: &str) -> Result<Self, SettingsDecodeError> {
        decode_settings(payload)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
