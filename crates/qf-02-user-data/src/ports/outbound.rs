//! Outbound Ports (Driven Ports)

/// Source of uniform samples (Driven Port)
///
/// Injected so tests can force either identifier deterministically.
pub trait RandomSource: Send + Sync {
    /// A sample in `[0, 1)`.
    fn next_unit(&self) -> f64;
}
