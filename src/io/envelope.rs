//! JSON output envelope for all CLI commands.
//!
//! Every command prints this structure when `--json` is used, so scripts can
//! branch on `status`/`code` without parsing human-readable text.

use serde::{Deserialize, Serialize};

use super::exit_code::ExitCode;
use crate::error::CalcError;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Message type for stream discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Successful result
    Result,
    /// Error occurred
    Error,
}

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    InvalidArgument,
    ConfigError,
}

impl ResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Ok => ExitCode::Success,
            Self::InvalidArgument => ExitCode::CalculationError,
            Self::ConfigError => ExitCode::GeneralError,
        }
    }
}

/// Operation and step syntax errors are rejected by clap before a command
/// runs, so only arithmetic failures reach an envelope. All of them are
/// reported as bad input.
impl From<&CalcError> for ResultCode {
    fn from(_err: &CalcError) -> Self {
        Self::InvalidArgument
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Message type for stream discrimination
    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Process exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Suggested next step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Result payload (null on error unless partial state is reported)
    pub data: Option<T>,

    pub meta: Meta,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version (semver)
    pub schema_version: String,

    /// Fractional digits used for formatted values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u16>,

    /// Execution time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            precision: None,
            duration_ms: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            message_type: MessageType::Result,
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.as_u8(),
            message: "Operation completed successfully".to_string(),
            hint: None,
            data: Some(data),
            meta: Meta::default(),
        }
    }

    /// Create an error envelope. The exit code follows from `code`.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            status: Status::Error,
            code,
            exit_code: code.exit_code().as_u8(),
            message: message.into(),
            hint: None,
            data: None,
            meta: Meta::default(),
        }
    }

    /// Error envelope for a calculator failure, carrying its hint.
    pub fn from_calc_error(err: &CalcError) -> Self {
        Self::error(ResultCode::from(err), err.to_string()).with_hint(err.hint())
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a payload, e.g. the partial state of a failed chain.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_precision(mut self, precision: u16) -> Self {
        self.meta.precision = Some(precision);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.meta.duration_ms = Some(duration_ms);
        self
    }

    pub fn exit_code(&self) -> ExitCode {
        self.code.exit_code()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON string (no whitespace).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string(self)
    }
}
