//! # Quality Fixtures Test Suite
//!
//! Tests over the arithmetic unit (`qf-01-arithmetic`). The user data unit is
//! tested inside its own crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── fixture_suite/
//!     ├── authoring_patterns.rs  # Poor and acceptable test-authoring samples
//!     ├── boundaries.rs          # Numeric and request edge cases
//!     └── properties.rs          # Algebraic properties (proptest)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qf-tests
//! cargo test -p qf-tests fixture_suite::properties::
//! ```

pub mod fixture_suite;
