//! Named arithmetic operations and `op:operand` chain steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::math;

/// One of the four arithmetic primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Evaluate the matching primitive on `a` and `b`.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(math::add(a, b)),
            Self::Subtract => Ok(math::subtract(a, b)),
            Self::Multiply => Ok(math::multiply(a, b)),
            Self::Divide => math::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            "multiply" | "mul" | "*" => Ok(Self::Multiply),
            "divide" | "div" | "/" => Ok(Self::Divide),
            _ => Err(CalcError::UnknownOperation(s.to_string())),
        }
    }
}

/// A single chain step such as `multiply:2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub op: Operation,
    pub operand: f64,
}

impl Step {
    pub fn new(op: Operation, operand: f64) -> Self {
        Self { op, operand }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.op, self.operand)
    }
}

impl FromStr for Step {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, operand) = s
            .split_once(':')
            .ok_or_else(|| CalcError::InvalidStep(s.to_string()))?;
        let op = op.parse::<Operation>()?;
        let operand = operand
            .trim()
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidStep(s.to_string()))?;
        Ok(Self { op, operand })
    }
}
