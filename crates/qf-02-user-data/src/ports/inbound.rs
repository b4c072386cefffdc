//! Inbound Ports (Driving Ports)

use crate::domain::{DataEnvelope, ProcessedData, UserRecord};

/// Primary user data API (Driving Port)
pub trait UserDataApi: Send + Sync {
    /// Always the same record, whatever the state of the unit.
    fn lookup_user(&self) -> UserRecord;

    /// `true` only for the exact pair `admin` / `password`.
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// One of exactly two identifiers, chosen by the injected random source.
    fn generate_identifier(&self) -> u64;

    /// Conditional pass-through.
    ///
    /// In development mode the envelope is first emitted as a diagnostic.
    /// A `"test"` envelope is answered with `{"success": true}`; anything
    /// else is handed back unchanged.
    fn process_envelope(&self, envelope: DataEnvelope) -> ProcessedData;

    /// Unfinished operation. Does nothing.
    fn pending_user_update(&self);
}
