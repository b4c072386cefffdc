//! Identifier selection
//!
//! Only two identifiers exist. Which one is produced depends on a uniform
//! sample in `[0, 1)`; the distribution is not part of the contract.

/// Produced when the sample is strictly above the threshold.
pub const PRIMARY_ID: u64 = 12345;
/// Produced otherwise.
pub const SECONDARY_ID: u64 = 67890;

const THRESHOLD: f64 = 0.5;

/// Map a sample to one of the two identifiers. Never yields a third value,
/// including for NaN or out-of-range samples.
pub fn select_identifier(sample: f64) -> u64 {
    if sample > THRESHOLD {
        PRIMARY_ID
    } else {
        SECONDARY_ID
    }
}
