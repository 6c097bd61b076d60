// crates/admission-gate-core/src/lib.rs
// ============================================================================
// Module: Admission Gate Core
// Description: Settings decoding, validation orchestration, and the response
// contract for admission policies.
// Purpose: Provide the typed guest-side core shared by all policies.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Admission Gate Core translates host-delivered JSON payloads into typed
//! policy settings, runs the policy's validation capability, and serializes
//! the fixed response contract the host understands (accept, reject, or
//! accept with mutation). Everything is constructed and discarded within a
//! single guest invocation; the core holds no cross-call state.
//!
//! Security posture: all payloads crossing the guest boundary are untrusted
//! and are decoded fail-closed into the structured error taxonomy in
//! [`settings`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod json;
pub mod request;
pub mod response;
pub mod settings;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use json::JsonError;
pub use json::from_json;
pub use json::to_json;
pub use json::to_json_or_text;
pub use request::ValidationRequest;
pub use response::SettingsValidationResponse;
pub use response::ValidationResponse;
pub use response::accept_request;
pub use response::accept_settings;
pub use response::mutate_request;
pub use response::reject_request;
pub use response::reject_settings;
pub use settings::SettingsDecodeError;
pub use settings::SettingsValidationError;
pub use settings::SettingsValidator;
pub use settings::Validatable;
pub use settings::decode_settings;
