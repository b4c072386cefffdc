//! Inbound Ports (Driving Ports)
//!
//! The call surface consumed by the fixture test suite and by the external
//! quality analyzer.

use crate::domain::OperationRequest;

/// Primary arithmetic API (Driving Port)
pub trait ArithmeticApi: Send + Sync {
    fn add(&self, x: f64, y: f64) -> f64;

    fn subtract(&self, x: f64, y: f64) -> f64;

    fn multiply(&self, x: f64, y: f64) -> f64;

    /// Never fails; `y == 0` yields `±inf` or NaN.
    fn divide(&self, x: f64, y: f64) -> f64;

    /// Truncated-division remainder.
    fn modulo(&self, x: f64, y: f64) -> f64;

    fn power(&self, x: f64, y: f64) -> f64;

    /// Negative input yields NaN.
    fn square_root(&self, x: f64) -> f64;

    /// Derived computation over a loosely shaped request.
    ///
    /// # Returns
    /// `None` unless the request kind is `"special"`, see
    /// [`crate::domain::derive_from_request`] for the full decision order.
    fn derive_from_request(&self, request: Option<&OperationRequest>) -> Option<f64>;

    /// Always `"success"`, whatever the state of the unit.
    fn fixed_success_token(&self) -> &'static str;

    /// Whether the debug flag is set. Emits a diagnostic when it is.
    fn debug_flag_enabled(&self) -> bool;

    /// Unfinished operation. Does nothing.
    fn pending_work(&self);
}
