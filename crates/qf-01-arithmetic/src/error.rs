//! Error types for the arithmetic unit

use thiserror::Error;

/// Errors from the untyped request entry points.
///
/// The arithmetic operations themselves never fail.
#[derive(Debug, Error)]
pub enum ArithmeticError {
    #[error("Invalid request document: {0}")]
    InvalidRequest(String),
}
