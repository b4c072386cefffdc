//! Diagnostic side channel.
//!
//! Units emit diagnostics through the [`DiagnosticSink`] port. The message and
//! the condition that triggers it are fixed by each unit; where the diagnostic
//! ends up is decided by the adapter the caller wires in.
//!
//! | Adapter | Destination |
//! |---------|-------------|
//! | `TracingSink` | `tracing` event at `info`, target `fixture_diagnostics` |
//! | `RecordingSink` | In-memory buffer, for assertions |
//! | `NoOpSink` | Dropped |

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

/// A single diagnostic emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Emitting unit, e.g. `"calculator"`
    pub source: &'static str,
    /// Human readable message
    pub message: String,
    /// Optional structured payload
    pub payload: Option<Value>,
}

impl Diagnostic {
    /// Diagnostic with a message only.
    pub fn new(source: &'static str, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
            payload: None,
        }
    }

    /// Attach a structured payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Write-only diagnostic port (Driven Port).
pub trait DiagnosticSink: Send + Sync {
    /// Emit one diagnostic. Must not fail.
    fn emit(&self, diagnostic: Diagnostic);
}

/// Sink that forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match &diagnostic.payload {
            Some(payload) => tracing::info!(
                target: "fixture_diagnostics",
                subsystem = diagnostic.source,
                payload = %payload,
                "{}",
                diagnostic.message
            ),
            None => tracing::info!(
                target: "fixture_diagnostics",
                subsystem = diagnostic.source,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.records.lock().push(diagnostic);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}
