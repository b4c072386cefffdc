//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - Random source used for identifiers

pub mod inbound;
pub mod outbound;

pub use inbound::UserDataApi;
pub use outbound::RandomSource;
