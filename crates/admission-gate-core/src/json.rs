// crates/admission-gate-core/src/json.rs
// ============================================================================
// Module: Generic JSON Integration
// Description: Conversions between typed structures and generic JSON values.
// Purpose: Represent payloads whose shape is not known at compile time.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Policies frequently handle JSON whose schema varies per resource kind,
//! most notably the object under review and any mutated replacement for it.
//! [`serde_json::Value`] is the universal representation for those payloads;
//! this module provides the explicit conversion operations between typed
//! structures and generic values, plus the degrade-to-text conversion used
//! by the logging bridge.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when converting between typed structures and JSON values.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum JsonError {
    /// A typed structure could not be represented as a JSON value.
    #[error("cannot represent value as JSON: {0}")]
    NotRepresentable(String),
    /// A JSON value did not match the expected typed structure.
    #[error("cannot extract typed value: {0}")]
    NotExtractable(String),
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Converts a typed structure into a generic JSON value.
///
/// # Errors
///
/// Returns [`JsonError::NotRepresentable`] when the structure cannot be
/// expressed as JSON (for example, a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<Value, JsonError> {
    serde_json::to_value(value).map_err(|err| JsonError::NotRepresentable(err.to_string()))
}

/// Extracts a typed structure from a generic JSON value.
///
/// # Errors
///
/// Returns [`JsonError::NotExtractable`] when the value does not match the
/// expected shape.
pub fn from_json<T: DeserializeOwned>(value: Value) -> Result<T, JsonError> {
    serde_json::from_value(value).map_err(|err| JsonError::NotExtractable(err.to_string()))
}

/// Converts a typed structure into a JSON value, degrading to a textual
/// description on failure.
///
/// Used by the logging bridge: a metadata value that cannot be represented
/// as JSON must not fail the whole log call, so it is replaced by a string
/// naming the offending key.
#[must_use]
pub fn to_json_or_text<T: Serialize>(key: &str, value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|_| Value::String(format!("cannot convert value of {key} to JSON")))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
