//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints one [`CommandOutput`] envelope, so
//! scripts can check `success` and read either `result` or `errors`.

use pcset_core::{CombinationEntry, ErrorCode, SetAnalysis};
use serde::{Deserialize, Serialize};

/// Error codes raised by the CLI itself.
///
/// Errors from the analysis library pass their own codes through
/// (`SET_xxx`, `NOTE_xxx`).
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "SET_002", "NOTE_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an error from any library error.
    pub fn from_error<E: ErrorCode>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }
}

/// Envelope printed by every `--json` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<JsonError>,
    /// Command result, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// A successful run.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// A failed run.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// A pitch ordering with its note names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedOrdering {
    pub pitches: Vec<i32>,
    pub names: Vec<String>,
}

/// Result of `pcset analyze --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeResult {
    /// The note names as given
    pub input: String,
    /// Full analysis artifacts
    pub analysis: SetAnalysis,
    /// Normal form with names
    pub normal: NamedOrdering,
    /// Inversion with names
    pub inversion: NamedOrdering,
    /// Inversion's normal form with names
    pub inversion_normal: NamedOrdering,
    /// Best normal order with names
    pub best: NamedOrdering,
    /// Interval-class vector in angle-bracket notation, e.g. "<001110>"
    pub icv: String,
}

/// Result of `pcset combinations --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombinationsResult {
    /// The note names as given
    pub input: String,
    /// Subset size
    pub pick: usize,
    /// Number of subsets analyzed
    pub analyzed: usize,
    /// Subsets whose label collided with a later subset
    pub collisions: usize,
    /// One entry per distinct label, in enumeration order
    pub entries: Vec<CombinationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcset_core::SetError;

    #[test]
    fn test_failure_omits_result() {
        let output: CommandOutput<AnalyzeResult> =
            CommandOutput::failure(vec![JsonError::from_error(&SetError::EmptySet)]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "SET_001");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_success_has_no_errors() {
        let output = CommandOutput::success(42);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"success":true,"errors":[],"result":42}"#);
    }
}
