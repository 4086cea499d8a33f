//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on every subcommand so other tools can parse
//! results without scraping colored text.

use serde::Serialize;

use polydist_core::{DistanceReport, RequestError};

/// Error codes for CLI-level failures.
///
/// Library failures pass their own codes through (`DIST_xxx`, `REQ_xxx`).
pub mod error_codes {
    /// Coefficient list could not be parsed
    pub const COEFFICIENT_PARSE: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "DIST_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches the file the error came from.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&RequestError> for JsonError {
    fn from(err: &RequestError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// Output of `polydist distance --json` and `polydist demo --json`.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceOutput {
    /// Whether the distance was computed
    pub success: bool,
    /// Errors that prevented the computation (empty on success)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    /// Aligned vectors, delta and distance (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DistanceReport>,
}

impl DistanceOutput {
    /// Creates a successful output.
    pub fn success(report: DistanceReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(report),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Output of `polydist align --json`.
#[derive(Debug, Clone, Serialize)]
pub struct AlignOutput {
    /// Whether both coefficient lists parsed
    pub success: bool,
    /// Parse errors (empty on success)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    /// First list after padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Vec<f64>>,
    /// Second list after padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Vec<f64>>,
}

impl AlignOutput {
    /// Creates a successful output.
    pub fn success(left: Vec<f64>, right: Vec<f64>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            left: Some(left),
            right: Some(right),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            left: None,
            right: None,
        }
    }
}
