//! Init and Config commands.

use serde_json::json;

use crate::config::Settings;
use crate::io::format::print_envelope;
use crate::io::{Envelope, ExitCode, OutputFormat, ResultCode};

/// Run init command - create configuration file.
pub fn run_init(force: bool, format: OutputFormat) -> ExitCode {
    match Settings::init_config_file(force) {
        Ok(path) => {
            crate::log_event!("config", "created", "{}", path.display());
            if format.is_json() {
                print_envelope(
                    &Envelope::success(json!({ "path": path.display().to_string() }))
                        .with_message(format!("Created {}", path.display())),
                );
            } else {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
            }
            ExitCode::Success
        }
        Err(e) => report_config_error(&format!("{e:#}"), format),
    }
}

/// Run config command - display current configuration.
pub fn run_config(settings: &Settings, format: OutputFormat) -> ExitCode {
    if format.is_json() {
        print_envelope(&Envelope::success(settings));
        return ExitCode::Success;
    }

    match toml::to_string_pretty(settings) {
        Ok(toml_str) => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => report_config_error(&format!("Error displaying config: {e}"), format),
    }
}

/// Report a settings problem in the requested format.
pub fn report_config_error(message: &str, format: OutputFormat) -> ExitCode {
    let envelope: Envelope<()> = Envelope::error(ResultCode::ConfigError, message)
        .with_hint("Run 'calcchain init --force' to regenerate the settings file");
    if format.is_json() {
        print_envelope(&envelope);
    } else {
        eprintln!("Error: {message}");
    }
    envelope.exit_code()
}
