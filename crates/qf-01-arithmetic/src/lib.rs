//! # QF-01 Arithmetic
//!
//! Arithmetic unit under test for the quality fixture corpus.
//!
//! The unit is deliberately seeded with patterns the external analyzer must
//! detect: a fixed response (`fixed_success_token`), a debug-only branch
//! (`debug_flag_enabled`), a nested conditional (`derive_from_request`), a
//! wide responsibility surface and an unfinished operation (`pending_work`).
//! Their observable behavior is part of the contract and must stay as is.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure functions, no ambient state
//!   - `operations`: add, subtract, multiply, divide, modulo, power, square root
//!   - `OperationRequest`, `derive_from_request`: the derived computation
//!
//! - **Ports Layer** (`ports/`): `ArithmeticApi` driving port
//!
//! - **Service Layer** (`service/`): `Calculator` implements `ArithmeticApi`
//!   with injected `AmbientFlags` and `DiagnosticSink`
//!
//! ## Usage Example
//!
//! ```
//! use qf_01_arithmetic::{ArithmeticApi, Calculator, OperationRequest};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//!
//! let request = OperationRequest::of_kind("special")
//!     .with_value(10.0)
//!     .with_multiplier(2.0);
//! assert_eq!(calc.derive_from_request(Some(&request)), Some(20.0));
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{derive_from_request, OperationRequest, SPECIAL_KIND};
pub use error::ArithmeticError;
pub use ports::ArithmeticApi;
pub use service::{Calculator, DEBUG_MODE_MESSAGE, DIAGNOSTIC_SOURCE};
