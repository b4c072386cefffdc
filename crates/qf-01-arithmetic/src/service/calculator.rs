//! Calculator Service
//!
//! Implements the `ArithmeticApi` port using injected flags and sink.

use std::sync::Arc;

use fixture_telemetry::{AmbientFlags, Diagnostic, DiagnosticSink, TracingSink};

use crate::domain::{self, operations, OperationRequest};
use crate::ports::ArithmeticApi;

/// Source name attached to diagnostics from this unit.
pub const DIAGNOSTIC_SOURCE: &str = "calculator";

/// Diagnostic emitted by `debug_flag_enabled` when the flag is set.
pub const DEBUG_MODE_MESSAGE: &str = "Debug mode enabled";

/// Token returned by `fixed_success_token`.
const SUCCESS_TOKEN: &str = "success";

/// Arithmetic unit.
///
/// Stateless apart from the flags captured at construction.
#[derive(Clone)]
pub struct Calculator {
    flags: AmbientFlags,
    sink: Arc<dyn DiagnosticSink>,
}

impl Calculator {
    /// Calculator with all flags unset, emitting diagnostics through `tracing`.
    pub fn new() -> Self {
        Self {
            flags: AmbientFlags::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Calculator configured from the process environment.
    pub fn from_env() -> Self {
        Self::new().with_flags(AmbientFlags::from_env())
    }

    pub fn with_flags(mut self, flags: AmbientFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn flags(&self) -> AmbientFlags {
        self.flags
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl ArithmeticApi for Calculator {
    fn add(&self, x: f64, y: f64) -> f64 {
        operations::add(x, y)
    }

    fn subtract(&self, x: f64, y: f64) -> f64 {
        operations::subtract(x, y)
    }

    fn multiply(&self, x: f64, y: f64) -> f64 {
        operations::multiply(x, y)
    }

    fn divide(&self, x: f64, y: f64) -> f64 {
        operations::divide(x, y)
    }

    fn modulo(&self, x: f64, y: f64) -> f64 {
        operations::modulo(x, y)
    }

    fn power(&self, x: f64, y: f64) -> f64 {
        operations::power(x, y)
    }

    fn square_root(&self, x: f64) -> f64 {
        operations::square_root(x)
    }

    fn derive_from_request(&self, request: Option<&OperationRequest>) -> Option<f64> {
        let result = domain::derive_from_request(request);
        tracing::trace!(
            subsystem = DIAGNOSTIC_SOURCE,
            has_request = request.is_some(),
            result = ?result,
            "derived computation"
        );
        result
    }

    fn fixed_success_token(&self) -> &'static str {
        SUCCESS_TOKEN
    }

    fn debug_flag_enabled(&self) -> bool {
        if self.flags.debug {
            self.sink
                .emit(Diagnostic::new(DIAGNOSTIC_SOURCE, DEBUG_MODE_MESSAGE));
            return true;
        }
        false
    }

    fn pending_work(&self) {
        // TODO: Implement this properly
    }
}
