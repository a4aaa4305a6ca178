//! Chain command - apply steps to a running value.

use std::time::Instant;

use serde::Serialize;

use super::OutputOptions;
use crate::calculator::Calculator;
use crate::error::CalcError;
use crate::io::format::print_envelope;
use crate::io::{Envelope, ExitCode};
use crate::operation::Step;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainOutput {
    pub initial: f64,
    pub steps: Vec<Step>,
    pub value: f64,
    pub formatted: String,
}

/// State of a chain that stopped at a failing step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainFailure {
    /// 1-based position of the failing step
    pub failed_step: usize,
    pub step: Step,
    /// Value before the failing step, left untouched
    pub value: f64,
    pub formatted: String,
    #[serde(skip)]
    pub error: CalcError,
}

/// Apply `steps` to a calculator starting at `initial`.
pub fn evaluate(
    initial: f64,
    steps: &[Step],
    precision: u16,
) -> Result<ChainOutput, ChainFailure> {
    let mut calc = Calculator::new(initial);

    for (index, step) in steps.iter().enumerate() {
        if let Err(error) = calc.apply_step(*step) {
            return Err(ChainFailure {
                failed_step: index + 1,
                step: *step,
                value: calc.value(),
                formatted: calc.to_string_with_precision(precision),
                error,
            });
        }
    }

    Ok(ChainOutput {
        initial,
        steps: steps.to_vec(),
        value: calc.value(),
        formatted: calc.to_string_with_precision(precision),
    })
}

/// Run the chain command.
pub fn run(initial: f64, steps: Vec<Step>, options: OutputOptions) -> ExitCode {
    crate::log_event!("chain", "start", "initial {initial}, {} steps", steps.len());
    let started = Instant::now();

    match evaluate(initial, &steps, options.precision) {
        Ok(output) => {
            if options.format.is_json() {
                print_envelope(
                    &Envelope::success(output)
                        .with_precision(options.precision)
                        .with_duration_ms(started.elapsed().as_millis() as u64),
                );
            } else {
                println!("{}", output.formatted);
            }
            ExitCode::Success
        }
        Err(failure) => {
            let message = format!(
                "Step {} ({}) failed: {}",
                failure.failed_step, failure.step, failure.error
            );
            let envelope = Envelope::from_calc_error(&failure.error)
                .with_message(message)
                .with_data(failure.clone())
                .with_precision(options.precision);

            if options.format.is_json() {
                print_envelope(&envelope);
            } else {
                eprintln!("Error: {}", envelope.message);
                eprintln!("Value before failure: {}", failure.formatted);
            }
            envelope.exit_code()
        }
    }
}
