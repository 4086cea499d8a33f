//! JSON request documents.
//!
//! A request carries two coefficient lists and the precision matrix as rows:
//!
//! ```json
//! {
//!   "poly1": [1, 2, 3],
//!   "poly2": [4, 0, 0, 2],
//!   "inv_cov": [[1.2, 0.3, 0.1, 0.0],
//!               [0.3, 0.8, 0.2, 0.1],
//!               [0.1, 0.2, 1.0, 0.2],
//!               [0.0, 0.1, 0.2, 0.9]]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::align::AlignedPair;
use crate::distance::squared_distance_aligned;
use crate::error::DistanceError;
use crate::matrix::PrecisionMatrix;

/// Errors from loading or evaluating a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request parsed but the distance could not be computed.
    #[error(transparent)]
    Distance(#[from] DistanceError),
}

impl RequestError {
    /// Stable machine-readable code; distance failures keep their `DIST_xxx` code.
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::JsonParse(_) => "REQ_001",
            RequestError::Io(_) => "REQ_002",
            RequestError::Distance(e) => e.code(),
        }
    }
}

/// Two polynomials and the metric to compare them under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistanceRequest {
    /// Coefficients of the first polynomial, lowest degree first.
    pub poly1: Vec<f64>,
    /// Coefficients of the second polynomial, lowest degree first.
    pub poly2: Vec<f64>,
    /// Precision matrix, row by row.
    pub inv_cov: Vec<Vec<f64>>,
}

impl DistanceRequest {
    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a request file.
    pub fn from_file(path: &Path) -> Result<Self, RequestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Builds the precision matrix from `inv_cov`.
    pub fn precision(&self) -> Result<PrecisionMatrix, RequestError> {
        Ok(PrecisionMatrix::from_rows(&self.inv_cov)?)
    }

    /// Computes the distance and collects the intermediate vectors.
    pub fn evaluate(&self) -> Result<DistanceReport, RequestError> {
        let precision = self.precision()?;
        let aligned = AlignedPair::new(&self.poly1, &self.poly2);
        let squared = squared_distance_aligned(&aligned, &precision)?;
        let delta = aligned.delta();
        Ok(DistanceReport {
            aligned,
            delta,
            squared_distance: squared,
            distance: squared.sqrt(),
            symmetric: precision.is_symmetric(SYMMETRY_TOLERANCE),
        })
    }
}

/// Tolerance for the advisory symmetry flag in reports.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Outcome of evaluating a [`DistanceRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Both polynomials after zero-padding.
    pub aligned: AlignedPair,
    /// `aligned.left - aligned.right`.
    pub delta: Vec<f64>,
    /// `deltaᵀ · M · delta`.
    pub squared_distance: f64,
    /// Square root of `squared_distance`.
    pub distance: f64,
    /// Whether the precision matrix was symmetric. Informational only.
    pub symmetric: bool,
}
