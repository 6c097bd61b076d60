// crates/admission-gate-guest/src/lib.rs
// ============================================================================
// Module: Admission Gate Guest
// Description: Guest/host boundary for admission policies.
// Purpose: Provide the host-call seam, logging bridge, and guest entrypoints.
// Dependencies: admission-gate-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Admission Gate Guest wraps the core settings and response contract with
//! the thin boundary a WebAssembly policy needs: a transport seam for host
//! calls, a logging bridge that ships structured records to the host, the
//! guest entrypoint bodies (`protocol_version`, `validate_settings`), and
//! payload helpers for policy unit tests. The physical waPC transport stays
//! behind the [`hostcall::HostCallSender`] trait; this crate performs no
//! network or file I/O of its own.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod entrypoints;
pub mod hostcall;
pub mod logging;
pub mod testing;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use entrypoints::PROTOCOL_VERSION;
pub use entrypoints::protocol_version;
pub use entrypoints::validate_settings;
pub use entrypoints::validation_request;
pub use hostcall::HostCallError;
pub use hostcall::HostCallSender;
pub use hostcall::NoopHostCallSender;
pub use hostcall::RecordedHostCall;
pub use hostcall::RecordingHostCallSender;
pub use logging::LOG_BINDING;
pub use logging::LOG_NAMESPACE;
pub use logging::LOG_OPERATION;
pub use logging::LogLevel;
pub use logging::LogMetadata;
pub use logging::LogRecord;
pub use logging::PolicyLogger;
pub use testing::PayloadError;
pub use testing::validation_payload;
