//! Telemetry and ambient flag configuration from environment variables.

use std::env;

/// Environment variable holding the debug flag.
pub const DEBUG_VAR: &str = "DEBUG";
/// Exact value `DEBUG_VAR` must hold for the debug flag to be set.
pub const DEBUG_VALUE: &str = "true";
/// Environment variable holding the runtime mode.
pub const DEV_MODE_VAR: &str = "NODE_ENV";
/// Exact value `DEV_MODE_VAR` must hold for development mode.
pub const DEV_MODE_VALUE: &str = "development";

/// Process-wide flags read by the units, never written by them.
///
/// Both flags use exact string comparison: `DEBUG=1` or `NODE_ENV=dev`
/// leave them unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientFlags {
    /// `DEBUG == "true"`
    pub debug: bool,
    /// `NODE_ENV == "development"`
    pub dev_mode: bool,
}

impl AmbientFlags {
    /// Read the flags from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the flags through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            debug: lookup(DEBUG_VAR).as_deref() == Some(DEBUG_VALUE),
            dev_mode: lookup(DEV_MODE_VAR).as_deref() == Some(DEV_MODE_VALUE),
        }
    }

    /// Builder-style method to set the debug flag
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder-style method to set development mode
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}

/// Configuration for logging and diagnostics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log lines
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Ambient flags consumed by the units
    pub flags: AmbientFlags,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "quality-fixtures".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            flags: AmbientFlags::default(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FIXTURE_SERVICE_NAME`: Service name (default: quality-fixtures)
    /// - `FIXTURE_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `FIXTURE_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `FIXTURE_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `DEBUG`, `NODE_ENV`: Ambient flags, see [`AmbientFlags`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TelemetryConfig::from_env`] with an explicit lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: lookup("FIXTURE_SERVICE_NAME")
                .unwrap_or_else(|| "quality-fixtures".to_string()),

            log_level: lookup("FIXTURE_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            console_output: lookup("FIXTURE_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: lookup("FIXTURE_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            flags: AmbientFlags::from_lookup(&lookup),
        }
    }
}
