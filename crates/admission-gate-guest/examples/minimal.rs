// crates/admission-gate-guest/examples/minimal.rs
// ============================================================================
// Module: Admission Gate Minimal Example
// Description: Minimal end-to-end admission policy using in-memory transport.
// Purpose: Demonstrate settings validation, admission decisions, and logging.
// Dependencies: admission-gate-guest, admission-gate-core
// ============================================================================

//! ## Overview
//! Runs a minimal runtime-class admission policy without a WASM host. The
//! example exercises all three guest entrypoints against an in-memory host
//! call sender, so it is suitable for quick verification.

use std::collections::BTreeSet;
use std::sync::Arc;

use admission_gate_core::SettingsValidationError;
use admission_gate_core::Validatable;
use admission_gate_core::accept_request;
use admission_gate_core::reject_request;
use admission_gate_guest::LogLevel;
use admission_gate_guest::LogMetadata;
use admission_gate_guest::PolicyLogger;
use admission_gate_guest::RecordingHostCallSender;
use admission_gate_guest::log_record;
use admission_gate_guest::protocol_version;
use admission_gate_guest::validate_settings;
use admission_gate_guest::validation_payload;
use admission_gate_guest::validation_request;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Settings reserving runtime classes for trusted workloads.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeSettings {
    /// Runtime class names reserved by the cluster operator.
    reserved_runtimes: BTreeSet<String>,
    /// Runtime substituted for reserved requests.
    fallback_runtime: String,
}

impl Validatable for RuntimeSettings {
    fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.reserved_runtimes.contains(&self.fallback_runtime) {
            return Err(SettingsValidationError::failure(
                "fallback runtime must not be reserved",
            ));
        }
        Ok(())
    }
}

/// Decides one admission request against the decoded settings.
fn decide(settings: &RuntimeSettings, request: &serde_json::Value, logger: &PolicyLogger) -> String {
    let runtime = request["object"]["spec"]["runtimeClassName"].as_str();
    match runtime {
        Some(runtime) if settings.reserved_runtimes.contains(runtime) => {
            logger.log(&log_record!(
                LogLevel::Info,
                "rejecting reserved runtime",
                LogMetadata::new().with("runtime", &runtime)
            ));
            reject_request(
                Some(format!("runtime class '{runtime}' is reserved")),
                Some(403),
            )
        }
        _ => accept_request(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sender = Arc::new(RecordingHostCallSender::new());
    let logger = PolicyLogger::new("runtime-class-policy", sender.clone());

    let version = protocol_version("");
    if version != "\"v1\"" {
        return Err(Box::new(ExampleError("unexpected protocol version")));
    }

    let settings = RuntimeSettings {
        reserved_runtimes: BTreeSet::from(["kata".to_string()]),
        fallback_runtime: "runc".to_string(),
    };

    let settings_payload = serde_json::to_string(&settings)?;
    let settings_response = validate_settings::<RuntimeSettings>(&settings_payload);
    if !settings_response.contains("\"valid\":true") {
        return Err(Box::new(ExampleError("settings should be valid")));
    }

    let request = json!({
        "uid": "705ab4f5-6393-11e8-b7cc-42010a800002",
        "operation": "CREATE",
        "object": {"spec": {"runtimeClassName": "kata"}},
    })
    .to_string();
    let payload = validation_payload(&settings, &request)?;

    let envelope = validation_request::<RuntimeSettings>(&payload)?;
    let decision = decide(&envelope.settings, &envelope.request, &logger);
    if !decision.contains("\"accepted\":false") {
        return Err(Box::new(ExampleError("reserved runtime should be rejected")));
    }
    if sender.calls().len() != 1 {
        return Err(Box::new(ExampleError("rejection should emit one log entry")));
    }

    Ok(())
}
