//! Demo command - walk through the library's documented usage.

use serde::Serialize;

use super::OutputOptions;
use crate::calculator::Calculator;
use crate::io::format::print_envelope;
use crate::io::{Envelope, ExitCode};
use crate::math;

const PI_APPROX: f64 = 3.14159265;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutput {
    /// 10 + 5, * 2, - 3
    pub chain_result: f64,
    /// add(15.5, 7.2)
    pub sum: f64,
    /// Message from dividing by zero
    pub division_error: String,
    /// Value after the rejected division
    pub value_after_error: f64,
    pub pi_2: String,
    pub pi_5: String,
}

pub fn walkthrough() -> DemoOutput {
    let mut calc = Calculator::new(10.0);
    calc.add(5.0).multiply(2.0).subtract(3.0);
    let chain_result = calc.value();

    let sum = math::add(15.5, 7.2);

    let division_error = match calc.divide(0.0) {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    };

    let pi = Calculator::new(PI_APPROX);

    DemoOutput {
        chain_result,
        sum,
        division_error,
        value_after_error: calc.value(),
        pi_2: pi.to_string_with_precision(2),
        pi_5: pi.to_string_with_precision(5),
    }
}

/// Run the demo command. `precision` only affects the text rendering of the
/// numeric results.
pub fn run(options: OutputOptions) -> ExitCode {
    let output = walkthrough();

    if options.format.is_json() {
        print_envelope(&Envelope::success(output).with_precision(options.precision));
        return ExitCode::Success;
    }

    let precision = options.precision;
    println!(
        "Calculator(10).add(5).multiply(2).subtract(3) = {}",
        Calculator::new(output.chain_result).to_string_with_precision(precision)
    );
    println!(
        "add(15.5, 7.2) = {}",
        Calculator::new(output.sum).to_string_with_precision(precision)
    );
    println!("divide(0): Error: {}", output.division_error);
    println!(
        "Value after failed divide = {}",
        Calculator::new(output.value_after_error).to_string_with_precision(precision)
    );
    println!("Pi (2 decimals): {}", output.pi_2);
    println!("Pi (5 decimals): {}", output.pi_5);

    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_values() {
        let output = walkthrough();
        assert_eq!(output.chain_result, 27.0);
        assert!((output.sum - 22.7).abs() < 1e-12);
        assert_eq!(output.division_error, "Division by zero is not allowed");
        assert_eq!(output.value_after_error, 27.0);
        assert_eq!(output.pi_2, "3.14");
        assert_eq!(output.pi_5, "3.14159");
    }
}
