//! # QF-02 User Data
//!
//! User data unit under test for the quality fixture corpus.
//!
//! Seeded patterns: a hardcoded lookup (`lookup_user`), literal credential
//! matching (`authenticate`), a two-valued random identifier
//! (`generate_identifier`), a development-mode diagnostic with an early fixed
//! return (`process_envelope`) and an unfinished operation
//! (`pending_user_update`). Their observable behavior is part of the contract.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): records, credential check, identifier selection
//! - **Ports Layer** (`ports/`): `UserDataApi` (driving), `RandomSource` (driven)
//! - **Adapters Layer** (`adapters/`): `ThreadRandomSource`, `FixedRandomSource`
//! - **Service Layer** (`service/`): `UserService` implements `UserDataApi`
//!
//! ## Usage Example
//!
//! ```
//! use qf_02_user_data::adapters::FixedRandomSource;
//! use qf_02_user_data::{DataEnvelope, UserDataApi, UserService};
//!
//! let service = UserService::new().with_random_source(FixedRandomSource::high());
//! assert_eq!(service.generate_identifier(), 12345);
//! assert!(service.authenticate("admin", "password"));
//! assert!(service.process_envelope(DataEnvelope::of_kind("test")).is_ack());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    AuthCredentials, DataEnvelope, ProcessedData, SuccessAck, UserRecord, PRIMARY_ID,
    SECONDARY_ID,
};
pub use error::UserDataError;
pub use ports::{RandomSource, UserDataApi};
pub use service::{UserService, DEBUG_DATA_MESSAGE, DIAGNOSTIC_SOURCE};
