//! Domain Layer - Pure user data logic
//!
//! RULES:
//! - No I/O operations
//! - No randomness: identifier selection takes its sample as input

pub mod entities;
pub mod identifiers;

pub use entities::{
    credentials_match, AuthCredentials, DataEnvelope, ProcessedData, SuccessAck, UserRecord,
    ADMIN_PASSWORD, ADMIN_USERNAME, TEST_KIND,
};
pub use identifiers::{select_identifier, PRIMARY_ID, SECONDARY_ID};
