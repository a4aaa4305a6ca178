//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns an
//! [`ExitCode`](crate::io::ExitCode) instead of exiting the process.

pub mod chain;
pub mod compute;
pub mod demo;
pub mod init;

use crate::config::Settings;
use crate::io::OutputFormat;

/// Presentation options resolved from settings and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub precision: u16,
    pub format: OutputFormat,
}

impl OutputOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            precision: settings.display.precision,
            format: OutputFormat::from_json_flag(settings.display.json),
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
