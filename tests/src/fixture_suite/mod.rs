//! Fixture test suite over the arithmetic unit.

pub mod authoring_patterns;
pub mod boundaries;
pub mod properties;

use qf_01_arithmetic::Calculator;

/// Calculator shared by every test: flags unset, diagnostics through `tracing`.
pub fn calculator() -> Calculator {
    Calculator::new()
}
