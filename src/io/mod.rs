//! Output handling for the CLI.
//!
//! This module provides:
//! - Text or JSON output selection
//! - A JSON envelope shared by every command
//! - Process exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
