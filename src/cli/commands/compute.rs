//! Compute command - apply one arithmetic primitive.

use serde::Serialize;

use super::OutputOptions;
use crate::calculator::Calculator;
use crate::error::CalcResult;
use crate::io::format::print_envelope;
use crate::io::{Envelope, ExitCode};
use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeOutput {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub formatted: String,
}

/// Evaluate `op` on the operands and format the result.
pub fn compute(op: Operation, a: f64, b: f64, precision: u16) -> CalcResult<ComputeOutput> {
    let result = op.apply(a, b)?;
    Ok(ComputeOutput {
        operation: op,
        a,
        b,
        result,
        formatted: Calculator::new(result).to_string_with_precision(precision),
    })
}

/// Run the compute command.
pub fn run(op: Operation, a: f64, b: f64, options: OutputOptions) -> ExitCode {
    crate::debug_event!("compute", "start", "{a} {} {b}", op.symbol());

    match compute(op, a, b, options.precision) {
        Ok(output) => {
            if options.format.is_json() {
                let message = format!("{a} {} {b} = {}", op.symbol(), output.formatted);
                print_envelope(
                    &Envelope::success(output)
                        .with_message(message)
                        .with_precision(options.precision),
                );
            } else {
                println!("{}", output.formatted);
            }
            ExitCode::Success
        }
        Err(e) => {
            let envelope: Envelope<()> = Envelope::from_calc_error(&e);
            if options.format.is_json() {
                print_envelope(&envelope);
            } else {
                eprintln!("Error: {e}");
                if let Some(hint) = &envelope.hint {
                    eprintln!("Hint: {hint}");
                }
            }
            envelope.exit_code()
        }
    }
}
