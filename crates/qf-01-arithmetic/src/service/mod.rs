//! Service Layer
//!
//! `Calculator` wires the pure domain operations to the ambient flags and
//! the diagnostic sink.

mod calculator;

pub use calculator::{Calculator, DEBUG_MODE_MESSAGE, DIAGNOSTIC_SOURCE};
