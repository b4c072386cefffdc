//! Domain Layer - Pure arithmetic logic
//!
//! RULES:
//! - No I/O operations
//! - No ambient state

pub mod operations;
pub mod request;

pub use request::{derive_from_request, OperationRequest, SPECIAL_KIND};
