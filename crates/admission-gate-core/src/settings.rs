// crates/admission-gate-core/src/settings.rs
// ============================================================================
// Module: Policy Settings
// Description: Typed settings decoding and the settings validation capability.
// Purpose: Turn untrusted settings payloads into validated typed settings.
// Dependencies: crate::response, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Settings arrive from the host as untrusted JSON text. Decoding is
//! fail-closed: any structural failure rejects the whole payload and is
//! classified into a stable error taxonomy so the end user sees a precise,
//! single-line diagnostic. Decoded settings expose a validation capability
//! through [`Validatable`]; [`SettingsValidator`] orchestrates decode plus
//! validation into the serialized settings response contract.
//!
//! Security posture: settings payloads are untrusted input and never cause
//! a process fault; every failure becomes a rejection response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

use crate::response::accept_settings;
use crate::response::reject_settings;

// ============================================================================
// SECTION: Decode Errors
// ============================================================================

/// Structured decode failures for settings payloads.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `detail` always carries the underlying decoder message, including the
///   offending key and line/column position where the decoder provides them.
#[derive(Debug, Error)]
pub enum SettingsDecodeError {
    /// The payload is not valid JSON at all.
    #[error("malformed settings payload: {detail}")]
    MalformedPayload {
        /// Underlying decoder message.
        detail: String,
    },
    /// A required field is absent from the payload.
    #[error("key '{key}' not found: {detail}")]
    MissingField {
        /// Name of the missing field.
        key: String,
        /// Underlying decoder message.
        detail: String,
    },
    /// A field is present but holds null where a value was required.
    #[error("value not found: {detail}")]
    NullValue {
        /// Underlying decoder message.
        detail: String,
    },
    /// A field holds a value whose shape does not match the expected type.
    #[error("type mismatch: {detail}")]
    TypeMismatch {
        /// Underlying decoder message, including the expected type.
        detail: String,
    },
    /// Residual data-class failures not covered by a more precise variant.
    #[error("invalid settings payload: {detail}")]
    InvalidData {
        /// Underlying decoder message.
        detail: String,
    },
}

/// Extracts the backticked field name from a `missing field` decoder message.
fn missing_field_key(detail: &str) -> Option<String> {
    let rest = detail.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[.. end].to_string())
}

/// Classifies a decoder failure into the settings error taxonomy.
///
/// Classification is fail-closed: anything not positively identified maps to
/// [`SettingsDecodeError::InvalidData`].
fn classify_decode_error(err: &serde_json::Error) -> SettingsDecodeError {
    let detail = err.to_string();
    match err.classify() {
        Category::Syntax | Category::Eof => SettingsDecodeError::MalformedPayload {
            detail,
        },
        Category::Io => SettingsDecodeError::InvalidData {
            detail,
        },
        Category::Data => {
            if let Some(key) = missing_field_key(&detail) {
                SettingsDecodeError::MissingField {
                    key,
                    detail,
                }
            } else if detail.starts_with("invalid type: null") {
                SettingsDecodeError::NullValue {
                    detail,
                }
            } else if detail.starts_with("invalid type")
                || detail.starts_with("invalid value")
                || detail.starts_with("invalid length")
                || detail.starts_with("unknown variant")
            {
                SettingsDecodeError::TypeMismatch {
                    detail,
                }
            } else {
                SettingsDecodeError::InvalidData {
                    detail,
                }
            }
        }
    }
}

/// Decodes a raw settings payload into a typed settings structure.
///
/// No partial decoding: any structural failure rejects the whole payload.
///
/// # Errors
///
/// Returns [`SettingsDecodeError`] classifying why the payload was rejected.
pub fn decode_settings<S: DeserializeOwned>(payload: &str) -> Result<S, SettingsDecodeError> {
    serde_json::from_str(payload).map_err(|err| classify_decode_error(&err))
}

// ============================================================================
// SECTION: Validation Capability
// ============================================================================

/// Errors raised by a policy's settings validation capability.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - [`SettingsValidationError::Internal`] renders as a generic
///   "unknown error" message and never exposes internal error objects.
#[derive(Debug, Error)]
pub enum SettingsValidationError {
    /// The settings are invalid; the message is shown to the end user.
    #[error("{0}")]
    ValidationFailure(String),
    /// An unanticipated error occurred while validating.
    #[error("unknown error: {0}")]
    Internal(String),
}

impl SettingsValidationError {
    /// Creates a validation failure with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::ValidationFailure(message.into())
    }

    /// Creates an internal error reported as a generic "unknown error".
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Capability contract implemented by policy settings types.
///
/// Any settings type that is JSON-decodable and can validate itself may be
/// plugged into [`SettingsValidator`]. The [`fmt::Debug`] supertrait is the
/// debug-rendering capability policies use when logging their settings.
pub trait Validatable: fmt::Debug {
    /// Validates the decoded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError::ValidationFailure`] with a
    /// user-facing message when the settings are not valid, or
    /// [`SettingsValidationError::Internal`] for unanticipated failures.
    fn validate(&self) -> Result<(), SettingsValidationError>;
}

// ============================================================================
// SECTION: Settings Validator
// ============================================================================

/// Orchestrates settings decoding and validation for one settings type.
///
/// The validator is stateless; settings are constructed fresh per call from
/// the decoded payload and discarded with the invocation.
///
/// # Invariants
/// - Every call returns a well-formed serialized settings response; decode
///   and validation failures are data, never process-terminating faults.
pub struct SettingsValidator<S> {
    /// Marker for the policy settings type decoded by this validator.
    marker: PhantomData<fn() -> S>,
}

impl<S: Validatable + DeserializeOwned> SettingsValidator<S> {
    /// Creates a validator for the policy settings type `S`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Decodes and validates a settings payload.
    ///
    /// Returns the serialized settings response: `{valid: true}` when the
    /// payload decodes and validates, otherwise `{valid: false}` with a
    /// single human-readable message. Pure with respect to external state.
    #[must_use]
    pub fn validate(&self, payload: &str) -> String {
        let settings: S = match decode_settings(payload) {
            Ok(settings) => settings,
            Err(err) => return reject_settings(Some(err.to_string())),
        };

        match settings.validate() {
            Ok(()) => accept_settings(),
            Err(SettingsValidationError::ValidationFailure(message)) => {
                reject_settings(Some(message))
            }
            Err(err @ SettingsValidationError::Internal(_)) => {
                reject_settings(Some(err.to_string()))
            }
        }
    }
}

impl<S: Validatable + DeserializeOwned> Default for SettingsValidator<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
