//! Chainable value holder.
//!
//! A [`Calculator`] carries one `f64` and mutates it in place through the
//! arithmetic primitives in [`crate::math`]. Every mutator returns
//! `&mut Self` so calls can be chained; division returns a `Result` and
//! leaves the value untouched when it fails.
//!
//! ```
//! use calcchain::Calculator;
//!
//! let mut calc = Calculator::new(10.0);
//! calc.add(5.0).multiply(2.0).subtract(3.0);
//! assert_eq!(calc.value(), 27.0);
//!
//! assert!(calc.divide(0.0).is_err());
//! assert_eq!(calc.value(), 27.0);
//!
//! assert_eq!(Calculator::new(3.14159).to_string(), "3.14");
//! assert_eq!(format!("{:.5}", Calculator::new(3.14159)), "3.14159");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::math;
use crate::operation::{Operation, Step};

/// Digits after the decimal point when no precision is requested.
pub const DEFAULT_PRECISION: u16 = 2;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    pub fn new(initial: f64) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self
    }

    pub fn add(&mut self, value: f64) -> &mut Self {
        self.store(math::add(self.value, value), Operation::Add)
    }

    pub fn subtract(&mut self, value: f64) -> &mut Self {
        self.store(math::subtract(self.value, value), Operation::Subtract)
    }

    pub fn multiply(&mut self, value: f64) -> &mut Self {
        self.store(math::multiply(self.value, value), Operation::Multiply)
    }

    /// Divide the held value by `value`.
    ///
    /// The error from [`math::divide`] is returned as-is and the held value
    /// is not modified.
    pub fn divide(&mut self, value: f64) -> CalcResult<&mut Self> {
        let quotient = math::divide(self.value, value)?;
        Ok(self.store(quotient, Operation::Divide))
    }

    pub fn reset(&mut self) -> &mut Self {
        self.value = 0.0;
        self
    }

    /// Apply a named operation, e.g. one parsed from user input.
    pub fn apply(&mut self, op: Operation, value: f64) -> CalcResult<&mut Self> {
        match op {
            Operation::Add => Ok(self.add(value)),
            Operation::Subtract => Ok(self.subtract(value)),
            Operation::Multiply => Ok(self.multiply(value)),
            Operation::Divide => self.divide(value),
        }
    }

    pub fn apply_step(&mut self, step: Step) -> CalcResult<&mut Self> {
        self.apply(step.op, step.operand)
    }

    /// Fixed-point rendering with exactly `precision` fractional digits.
    ///
    /// `u16` is the widest precision the formatting machinery accepts.
    pub fn to_string_with_precision(&self, precision: u16) -> String {
        let precision = usize::from(precision);
        format!("{:.precision$}", self.value)
    }

    fn store(&mut self, result: f64, op: Operation) -> &mut Self {
        tracing::trace!(target: "calculator", "{op}: {} -> {result}", self.value);
        self.value = result;
        self
    }
}

/// Uses the formatter precision when given, otherwise two decimals.
impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(usize::from(DEFAULT_PRECISION));
        write!(f, "{:.precision$}", self.value)
    }
}

/// Equal when the values differ by less than `1e-9` (absolute).
impl PartialEq for Calculator {
    fn eq(&self, other: &Self) -> bool {
        math::approx_eq(self.value, other.value)
    }
}

impl From<f64> for Calculator {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Calculator> for f64 {
    fn from(calc: Calculator) -> Self {
        calc.value
    }
}
