//! Arithmetic primitives.
//!
//! Pure two-operand functions over `f64`. They hold no state and can be used
//! without a [`Calculator`](crate::Calculator).
//!
//! ```
//! use calcchain::math;
//!
//! assert_eq!(math::multiply(4.0, 2.5), 10.0);
//! assert!(math::divide(1.0, 0.0).is_err());
//! ```

use crate::error::{CalcError, CalcResult};

/// Divisors with a magnitude below this are rejected by [`divide`].
pub const DIVISION_EPSILON: f64 = 1e-10;

/// Absolute tolerance used when comparing two calculators for equality.
pub const EQUALITY_EPSILON: f64 = 1e-9;

/// Sum of `a` and `b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient `a / b`.
///
/// Fails with [`CalcError::InvalidArgument`] when `|b| < 1e-10`. The
/// threshold is absolute, so tiny but nonzero divisors are rejected too.
/// NaN and infinite operands are not checked.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b.abs() < DIVISION_EPSILON {
        return Err(CalcError::division_by_zero());
    }
    Ok(a / b)
}

/// Absolute-epsilon comparison shared by `Calculator`'s `PartialEq`.
///
/// Large magnitudes may compare unequal even when practically equal.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EQUALITY_EPSILON
}
