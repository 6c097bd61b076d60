// crates/admission-gate-guest/src/logging.rs
// ============================================================================
// Module: Logging Bridge
// Description: Structured log records shipped to the host as flat JSON.
// Purpose: Route policy logs through the tracing host call.
// Dependencies: crate::hostcall, admission-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The host accepts log entries as single flat JSON objects delivered over
//! the generic host call. The bridge flattens level, message, source
//! location, and string-keyed metadata into one object and hands it to an
//! explicitly injected [`HostCallSender`]; there is no global logger. The
//! call is a one-way notification: host-side failures are discarded.
//!
//! Metadata values that cannot be represented as JSON degrade to their
//! textual description rather than failing the whole log call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use admission_gate_core::json::to_json_or_text;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::hostcall::HostCallSender;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Host binding for log delivery.
pub const LOG_BINDING: &str = "kubewarden";
/// Namespace within the log binding.
pub const LOG_NAMESPACE: &str = "tracing";
/// Operation within the log namespace.
pub const LOG_OPERATION: &str = "log";

// ============================================================================
// SECTION: Log Levels
// ============================================================================

/// Log severity levels, ordered from most to least verbose.
///
/// # Invariants
/// - Variants are stable for serialization and host-side filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Fine-grained tracing output.
    Trace,
    /// Debugging output.
    Debug,
    /// Informational output.
    Info,
    /// Recoverable or noteworthy conditions.
    Warning,
    /// Errors the policy could not handle.
    Error,
}

impl LogLevel {
    /// Returns a stable label for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

// ============================================================================
// SECTION: Metadata
// ============================================================================

/// String-keyed metadata attached to a log record.
///
/// Values may be scalars, arrays, or nested mappings. Conversion happens at
/// insertion: a value that cannot be represented as JSON is replaced by a
/// string naming the offending key, so emitting the record never fails.
#[derive(Debug, Clone, Default)]
pub struct LogMetadata {
    /// Converted metadata entries.
    entries: Map<String, Value>,
}

impl LogMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a metadata value, degrading to text when not representable.
    pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: &T) {
        let key = key.into();
        let value = to_json_or_text(&key, value);
        self.entries.insert(key, value);
    }

    /// Builder-style [`LogMetadata::insert`].
    #[must_use]
    pub fn with<T: Serialize>(mut self, key: impl Into<String>, value: &T) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of metadata entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the metadata is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Log Records
// ============================================================================

/// One structured log record.
///
/// # Invariants
/// - Flattening always succeeds; every field is already a JSON value.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Record severity.
    level: LogLevel,
    /// Log message.
    message: String,
    /// Source file of the log call.
    file: Option<String>,
    /// Function or module of the log call.
    function: Option<String>,
    /// Source line of the log call.
    line: Option<u32>,
    /// Metadata attached to the record.
    metadata: LogMetadata,
}

impl LogRecord {
    /// Creates a record with a level and message.
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            file: None,
            function: None,
            line: None,
            metadata: LogMetadata::new(),
        }
    }

    /// Attaches the source location of the log call.
    #[must_use]
    pub fn with_source(mut self, file: &str, function: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.function = Some(function.to_string());
        self.line = Some(line);
        self
    }

    /// Attaches metadata to the record.
    #[must_use]
    pub fn with_metadata(mut self, metadata: LogMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Record severity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Flattens the record into a single flat JSON object.
    ///
    /// Metadata entries are inserted after the reserved fields and win on
    /// key collision.
    fn flatten(&self) -> Map<String, Value> {
        let mut entry = Map::new();
        entry.insert("level".to_string(), Value::String(self.level.as_str().to_string()));
        entry.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(file) = &self.file {
            entry.insert("file".to_string(), Value::String(file.clone()));
        }
        if let Some(function) = &self.function {
            entry.insert("function".to_string(), Value::String(function.clone()));
        }
        if let Some(line) = self.line {
            entry.insert("line".to_string(), Value::Number(line.into()));
        }
        for (key, value) in &self.metadata.entries {
            entry.insert(key.clone(), value.clone());
        }
        entry
    }
}

/// Builds a [`LogRecord`] capturing the call site's source location.
#[macro_export]
macro_rules! log_record {
    ($level:expr, $message:expr) => {
        $crate::logging::LogRecord::new($level, $message).with_source(
            file!(),
            module_path!(),
            line!(),
        )
    };
    ($level:expr, $message:expr, $metadata:expr) => {
        $crate::logging::LogRecord::new($level, $message)
            .with_source(file!(), module_path!(), line!())
            .with_metadata($metadata)
    };
}

// ============================================================================
// SECTION: Policy Logger
// ============================================================================

/// Logging backend routing records to the host tracing operation.
///
/// The sender is injected explicitly at composition time; the logger holds
/// no global state and is safe to clone into policy components.
#[derive(Clone)]
pub struct PolicyLogger {
    /// Label identifying the policy in host-side pipelines.
    label: String,
    /// Minimum level a record must reach to be emitted.
    level: LogLevel,
    /// Transport used to deliver log entries.
    sender: Arc<dyn HostCallSender>,
}

impl PolicyLogger {
    /// Creates a logger with the default `info` level.
    #[must_use]
    pub fn new(label: impl Into<String>, sender: Arc<dyn HostCallSender>) -> Self {
        Self {
            label: label.into(),
            level: LogLevel::Info,
            sender,
        }
    }

    /// Sets the minimum level records must reach to be emitted.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Label identifying the policy.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Minimum emitted level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a record at `level` would be emitted.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Emits a record through the host tracing operation.
    ///
    /// Fire-and-forget: records below the configured level are dropped
    /// locally and host-side delivery failures are discarded.
    pub fn log(&self, record: &LogRecord) {
        if !self.enabled(record.level()) {
            return;
        }
        let entry = record.flatten();
        if let Ok(payload) = serde_json::to_string(&entry) {
            let _ = self.sender.host_call(
                LOG_BINDING,
                LOG_NAMESPACE,
                LOG_OPERATION,
                payload.as_bytes(),
            );
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
