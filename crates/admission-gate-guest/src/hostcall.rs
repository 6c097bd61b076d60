// crates/admission-gate-guest/src/hostcall.rs
// ============================================================================
// Module: Host Call Seam
// Description: Transport-agnostic interface for guest-to-host calls.
// Purpose: Keep the physical waPC transport out of the SDK core.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Guest code crosses the guest/host boundary through a single generic host
//! call identified by binding, namespace, and operation. The transport that
//! physically carries the payload is an external collaborator; this module
//! defines its contract and two reference implementations. Callers that use
//! the host call as a one-way notification discard the result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Host call errors surfaced by transport implementations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum HostCallError {
    /// The transport rejected or failed the host call.
    #[error("host call failed: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Transport seam for guest-to-host calls.
pub trait HostCallSender: Send + Sync {
    /// Performs a host call and returns the host's response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HostCallError`] when the transport cannot deliver the call.
    fn host_call(
        &self,
        binding: &str,
        namespace: &str,
        operation: &str,
        payload: &[u8],
    ) -> Result<Vec<u8>, HostCallError>;
}

// ============================================================================
// SECTION: Reference Implementations
// ============================================================================

/// Sender that discards every host call.
///
/// # Invariants
/// - Calls are intentionally discarded; the response is always empty.
pub struct NoopHostCallSender;

impl HostCallSender for NoopHostCallSender {
    fn host_call(
        &self,
        _binding: &str,
        _namespace: &str,
        _operation: &str,
        _payload: &[u8],
    ) -> Result<Vec<u8>, HostCallError> {
        Ok(Vec::new())
    }
}

/// One host call captured by [`RecordingHostCallSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedHostCall {
    /// Host binding the call targeted.
    pub binding: String,
    /// Namespace within the binding.
    pub namespace: String,
    /// Operation within the namespace.
    pub operation: String,
    /// Raw payload bytes delivered to the host.
    pub payload: Vec<u8>,
}

/// Sender that records host calls for inspection in policy tests.
#[derive(Default)]
pub struct RecordingHostCallSender {
    /// Captured calls in delivery order.
    calls: Mutex<Vec<RecordedHostCall>>,
}

impl RecordingHostCallSender {
    /// Creates an empty recording sender.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls recorded so far, in delivery order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedHostCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl HostCallSender for RecordingHostCallSender {
    fn host_call(
        &self,
        binding: &str,
        namespace: &str,
        operation: &str,
        payload: &[u8],
    ) -> Result<Vec<u8>, HostCallError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedHostCall {
                binding: binding.to_string(),
                namespace: namespace.to_string(),
                operation: operation.to_string(),
                payload: payload.to_vec(),
            });
        }
        Ok(Vec::new())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
