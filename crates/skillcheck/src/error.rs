//! Coded errors shared by every assertion and loader.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub type CheckResult<T> = Result<T, CheckError>;

/// Stable error codes. The string form is part of the CLI's JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "E_ASSERTION_MISMATCH")]
    AssertionMismatch,
    #[serde(rename = "E_MISSING_FIXTURE")]
    MissingFixture,
    #[serde(rename = "E_CARDINALITY_MISMATCH")]
    CardinalityMismatch,
    #[serde(rename = "E_DECODE")]
    Decode,
    #[serde(rename = "E_IO")]
    Io,
    #[serde(rename = "E_CLI_INVALID_ARG")]
    CliInvalidArg,
}

impl ErrorCode {
    /// Wire form, e.g. `E_ASSERTION_MISMATCH`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssertionMismatch => "E_ASSERTION_MISMATCH",
            Self::MissingFixture => "E_MISSING_FIXTURE",
            Self::CardinalityMismatch => "E_CARDINALITY_MISMATCH",
            Self::Decode => "E_DECODE",
            Self::Io => "E_IO",
            Self::CliInvalidArg => "E_CLI_INVALID_ARG",
        }
    }

    /// Inverse of [`ErrorCode::as_str`].
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "E_ASSERTION_MISMATCH" => Some(Self::AssertionMismatch),
            "E_MISSING_FIXTURE" => Some(Self::MissingFixture),
            "E_CARDINALITY_MISMATCH" => Some(Self::CardinalityMismatch),
            "E_DECODE" => Some(Self::Decode),
            "E_IO" => Some(Self::Io),
            "E_CLI_INVALID_ARG" => Some(Self::CliInvalidArg),
            _ => None,
        }
    }

    /// Process exit status used by the CLI when a check fails with this code.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::AssertionMismatch => 10,
            Self::MissingFixture => 11,
            Self::CardinalityMismatch => 12,
            Self::Decode => 13,
            Self::Io => 14,
            Self::CliInvalidArg => 2,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed check or an unusable fixture.
///
/// `context` carries the machine-readable details: the offending key or path,
/// the expected and actual values, the fixture id, or the compared counts.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
#[error("{code}: {message}")]
pub struct CheckError {
    pub code: ErrorCode,
    pub message: String,
    pub context: Option<Value>,
}

impl CheckError {
    /// Value at `path` differs from the expected one.
    pub fn mismatch(path: impl Into<String>, expected: &Value, actual: Option<&Value>) -> Self {
        let path = path.into();
        let actual_text = actual.map_or_else(|| "<absent>".to_string(), Value::to_string);
        Self {
            code: ErrorCode::AssertionMismatch,
            message: format!("'{path}' expected {expected}, got {actual_text}"),
            context: Some(serde_json::json!({
                "path": path,
                "expected": expected,
                "actual": actual,
            })),
        }
    }

    /// Expected key at `path` is absent from the actual value.
    pub fn missing_key(path: impl Into<String>, expected: &Value) -> Self {
        let path = path.into();
        Self {
            code: ErrorCode::AssertionMismatch,
            message: format!("'{path}' is missing from the actual value"),
            context: Some(serde_json::json!({
                "path": path,
                "expected": expected,
                "actual": Value::Null,
            })),
        }
    }

    /// No expected record exists for the device `id`.
    pub fn missing_fixture(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            code: ErrorCode::MissingFixture,
            message: format!("no expected fixture for '{id}'"),
            context: Some(serde_json::json!({ "id": id })),
        }
    }

    /// Actual and expected collections of `kind` differ in size.
    pub fn cardinality(kind: &str, expected: usize, actual: usize) -> Self {
        Self {
            code: ErrorCode::CardinalityMismatch,
            message: format!("expected {expected} {kind}, got {actual}"),
            context: Some(serde_json::json!({
                "kind": kind,
                "expected": expected,
                "actual": actual,
            })),
        }
    }

    /// Input could not be parsed into the expected shape.
    pub fn decode(message: impl Into<String>, err: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::Decode,
            message: message.into(),
            context: Some(serde_json::json!({ "source": err.to_string() })),
        }
    }

    /// Reading a fixture file failed.
    pub fn io(message: impl Into<String>, err: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::Io,
            message: message.into(),
            context: Some(serde_json::json!({ "source": err.to_string() })),
        }
    }

    /// Command-line arguments are inconsistent.
    pub fn cli_invalid_arg(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::CliInvalidArg,
            message: message.into(),
            context: None,
        }
    }

    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Serializable form for JSON output.
    #[must_use]
    pub fn to_error_info(&self) -> crate::model::ErrorInfo {
        crate::model::ErrorInfo {
            code: self.code.as_str().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
        }
    }
}
