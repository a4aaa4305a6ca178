use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Divisor too close to zero to divide by.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown operation: '{0}'. Expected one of add, subtract, multiply, divide")]
    UnknownOperation(String),

    #[error("Invalid step '{0}'. Expected <operation>:<operand>, e.g. add:5")]
    InvalidStep(String),
}

impl CalcError {
    pub(crate) fn division_by_zero() -> Self {
        Self::InvalidArgument("Division by zero is not allowed".to_string())
    }

    /// Recovery suggestion shown next to the error in CLI output.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "Use a divisor whose magnitude is at least 1e-10",
            Self::UnknownOperation(_) => "Operations: add (+), subtract (-), multiply (*), divide (/)",
            Self::InvalidStep(_) => "Write chain steps as op:operand, e.g. multiply:2",
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
