//! Basic numeric operations.
//!
//! All operations are total over `f64`: division by zero and square roots of
//! negative numbers produce IEEE-754 infinities and NaN instead of failing.

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// `x / y`; `y == 0` yields `±inf` (or NaN for `0 / 0`).
pub fn divide(x: f64, y: f64) -> f64 {
    x / y
}

/// Truncated-division remainder: the result has the sign of `x`.
pub fn modulo(x: f64, y: f64) -> f64 {
    x % y
}

pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Principal square root; negative input yields NaN.
pub fn square_root(x: f64) -> f64 {
    x.sqrt()
}
