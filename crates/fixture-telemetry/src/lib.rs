//! # Fixture Telemetry
//!
//! Ambient stack shared by the quality fixture units.
//!
//! ## Components
//!
//! - **Config**: `AmbientFlags` (`DEBUG`, `NODE_ENV`) and `TelemetryConfig`
//! - **Diagnostics**: `DiagnosticSink` port with tracing, recording and no-op adapters
//! - **Logging**: `tracing-subscriber` initialisation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fixture_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEBUG` | unset | Debug flag, set only by the exact value `true` |
//! | `NODE_ENV` | unset | Development mode, set only by the exact value `development` |
//! | `FIXTURE_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `FIXTURE_JSON_LOGS` | `false` | JSON formatted output |
//! | `FIXTURE_CONSOLE_OUTPUT` | `true` | Console output |

mod config;
mod diagnostics;
mod logging;

pub use config::{
    AmbientFlags, TelemetryConfig, DEBUG_VALUE, DEBUG_VAR, DEV_MODE_VALUE, DEV_MODE_VAR,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, NoOpSink, RecordingSink, TracingSink};
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
