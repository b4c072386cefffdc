//! User Service
//!
//! Implements the `UserDataApi` port using injected flags, sink and random
//! source.

use std::sync::Arc;

use fixture_telemetry::{log_event, AmbientFlags, Diagnostic, DiagnosticSink, TracingSink};
use serde_json::Value;

use crate::adapters::ThreadRandomSource;
use crate::domain::{
    credentials_match, select_identifier, DataEnvelope, ProcessedData, SuccessAck, UserRecord,
};
use crate::error::UserDataError;
use crate::ports::{RandomSource, UserDataApi};

/// Source name attached to diagnostics from this unit.
pub const DIAGNOSTIC_SOURCE: &str = "user-service";

/// Diagnostic emitted by `process_envelope` in development mode.
pub const DEBUG_DATA_MESSAGE: &str = "Debug data:";

/// User data unit.
pub struct UserService<R: RandomSource = ThreadRandomSource> {
    flags: AmbientFlags,
    sink: Arc<dyn DiagnosticSink>,
    rng: R,
}

impl UserService<ThreadRandomSource> {
    /// Service with all flags unset, thread-local randomness and `tracing`
    /// diagnostics.
    pub fn new() -> Self {
        Self {
            flags: AmbientFlags::default(),
            sink: Arc::new(TracingSink),
            rng: ThreadRandomSource,
        }
    }

    /// Service configured from the process environment.
    pub fn from_env() -> Self {
        Self::new().with_flags(AmbientFlags::from_env())
    }
}

impl Default for UserService<ThreadRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> UserService<R> {
    pub fn with_flags(mut self, flags: AmbientFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the random source.
    pub fn with_random_source<S: RandomSource>(self, rng: S) -> UserService<S> {
        UserService {
            flags: self.flags,
            sink: self.sink,
            rng,
        }
    }

    pub fn flags(&self) -> AmbientFlags {
        self.flags
    }

    /// Untyped entry point for envelopes arriving as JSON.
    ///
    /// `null` is a fault, never replaced by a default envelope.
    pub fn process_json(&self, value: Value) -> Result<Value, UserDataError> {
        let envelope = match value {
            Value::Null => return Err(UserDataError::MissingEnvelope),
            Value::Object(map) => DataEnvelope::from_map(map),
            other => {
                let kind = json_kind(&other);
                log_event!(debug, DIAGNOSTIC_SOURCE, "Rejected non-object envelope", kind = kind);
                return Err(UserDataError::InvalidEnvelope(kind.to_string()));
            }
        };
        let processed = self.process_envelope(envelope);
        Ok(serde_json::to_value(processed)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<R: RandomSource> UserDataApi for UserService<R> {
    fn lookup_user(&self) -> UserRecord {
        UserRecord::fixture()
    }

    fn authenticate(&self, username: &str, password: &str) -> bool {
        credentials_match(username, password)
    }

    fn generate_identifier(&self) -> u64 {
        select_identifier(self.rng.next_unit())
    }

    fn process_envelope(&self, envelope: DataEnvelope) -> ProcessedData {
        if self.flags.dev_mode {
            let diagnostic = Diagnostic::new(DIAGNOSTIC_SOURCE, DEBUG_DATA_MESSAGE);
            self.sink.emit(match serde_json::to_value(&envelope) {
                Ok(payload) => diagnostic.with_payload(payload),
                Err(_) => diagnostic,
            });
        }

        if envelope.is_test() {
            return ProcessedData::Ack(SuccessAck::OK);
        }

        ProcessedData::PassThrough(envelope)
    }

    fn pending_user_update(&self) {
        // TODO: Implement user update logic
    }
}
