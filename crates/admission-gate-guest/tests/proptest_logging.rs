// crates/admission-gate-guest/tests/proptest_logging.rs
// ============================================================================
// Module: Logging Property-Based Tests
// Description: Property tests for log record flattening and delivery.
// Purpose: Detect entry-shape drift across wide metadata input ranges.
// ============================================================================

//! Property-based tests for the logging bridge contract.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use admission_gate_guest::LogLevel;
use admission_gate_guest::LogMetadata;
use admission_gate_guest::LogRecord;
use admission_gate_guest::PolicyLogger;
use admission_gate_guest::RecordingHostCallSender;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy producing arbitrary JSON values up to a bounded depth.
fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_map(|v| { serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number) }),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map(".*", inner, 0 .. 4).prop_map(|entries| {
                Value::Object(entries.into_iter().collect())
            }),
        ]
    })
}

/// Metadata keys that never collide with the reserved entry fields.
fn metadata_key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}".prop_filter("reserved", |key| {
        !matches!(key.as_str(), "level" | "message" | "file" | "function" | "line")
    })
}

proptest! {
    #[test]
    fn every_metadata_entry_survives_flattening(
        entries in prop::collection::btree_map(metadata_key_strategy(), json_value_strategy(3), 0 .. 6),
        message in ".*",
    ) {
        let sender = Arc::new(RecordingHostCallSender::new());
        let logger = PolicyLogger::new("proptest-policy", sender.clone());

        let mut metadata = LogMetadata::new();
        for (key, value) in &entries {
            metadata.insert(key.clone(), value);
        }
        logger.log(&LogRecord::new(LogLevel::Error, message.clone()).with_metadata(metadata));

        let calls = sender.calls();
        prop_assert_eq!(calls.len(), 1);
        let entry: Value = serde_json::from_slice(&calls[0].payload).expect("valid JSON entry");
        prop_assert_eq!(entry["level"].clone(), Value::String("error".to_string()));
        prop_assert_eq!(entry["message"].as_str().expect("message"), message.as_str());
        for (key, value) in &entries {
            prop_assert_eq!(&entry[key.as_str()], value);
        }
    }

    #[test]
    fn disabled_levels_never_reach_the_host(message in ".*") {
        let sender = Arc::new(RecordingHostCallSender::new());
        let logger = PolicyLogger::new("proptest-policy", sender.clone());
        logger.log(&LogRecord::new(LogLevel::Trace, message.clone()));
        logger.log(&LogRecord::new(LogLevel::Debug, message));
        prop_assert!(sender.calls().is_empty());
    }
}
