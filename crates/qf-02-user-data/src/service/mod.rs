//! Service Layer

mod user_service;

pub use user_service::{UserService, DEBUG_DATA_MESSAGE, DIAGNOSTIC_SOURCE};
