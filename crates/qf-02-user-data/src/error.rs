//! Error types for the user data unit

use thiserror::Error;

/// Errors from the untyped envelope entry point.
#[derive(Debug, Error)]
pub enum UserDataError {
    /// `null` was passed where an envelope is required
    #[error("Missing envelope")]
    MissingEnvelope,

    #[error("Invalid envelope: expected a JSON object, got {0}")]
    InvalidEnvelope(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
