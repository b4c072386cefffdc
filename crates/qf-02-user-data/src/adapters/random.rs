//! Random Source Adapters

use rand::Rng;

use crate::ports::RandomSource;

/// Fixed random source for deterministic testing.
///
/// # Example
///
/// ```rust
/// use qf_02_user_data::adapters::FixedRandomSource;
/// use qf_02_user_data::RandomSource;
///
/// let rng = FixedRandomSource::new(0.75);
/// assert_eq!(rng.next_unit(), 0.75);
/// assert_eq!(rng.next_unit(), 0.75); // Always same value
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    value: f64,
}

impl FixedRandomSource {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Source that always selects the primary identifier.
    pub fn high() -> Self {
        Self::new(0.75)
    }

    /// Source that always selects the secondary identifier.
    pub fn low() -> Self {
        Self::new(0.25)
    }
}

impl RandomSource for FixedRandomSource {
    fn next_unit(&self) -> f64 {
        self.value
    }
}

/// Production random source backed by `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
