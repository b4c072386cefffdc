//! Ports Layer
//!
//! The arithmetic unit only has a driving port. Its single driven dependency,
//! the diagnostic sink, is the shared `fixture_telemetry::DiagnosticSink`.

pub mod inbound;

pub use inbound::ArithmeticApi;
