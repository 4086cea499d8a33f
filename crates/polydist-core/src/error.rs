//! Error types for distance computation.

use thiserror::Error;

/// Result type for distance operations.
pub type DistanceResult<T> = Result<T, DistanceError>;

/// Errors that can occur while computing a Mahalanobis distance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// Precision matrix dimension does not match the aligned sequence length.
    #[error("dimension mismatch: aligned length is {expected}, precision matrix is {found}x{found}")]
    DimensionMismatch {
        /// Aligned length of the coefficient sequences.
        expected: usize,
        /// Dimension of the supplied precision matrix.
        found: usize,
    },

    /// The quadratic form came out negative, so its square root is undefined.
    #[error("quadratic form is negative ({quadratic_form}); precision matrix is not positive semi-definite")]
    NumericDomain {
        /// The offending value of deltaᵀ·M·delta.
        quadratic_form: f64,
    },

    /// Matrix rows are ragged or the matrix is not square.
    #[error("precision matrix must be square: {rows} row(s), found a row of length {cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Length of the first row that breaks squareness.
        cols: usize,
    },

    /// A coefficient or matrix entry is NaN or infinite.
    #[error("non-finite value in {what}")]
    NonFiniteInput {
        /// Which input carried the value.
        what: &'static str,
    },

    /// Finite inputs produced a value outside the `f64` range.
    #[error("numeric overflow in {what}")]
    Overflow {
        /// Which intermediate overflowed.
        what: &'static str,
    },
}

impl DistanceError {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DistanceError::DimensionMismatch { .. } => "DIST_001",
            DistanceError::NumericDomain { .. } => "DIST_002",
            DistanceError::NotSquare { .. } => "DIST_003",
            DistanceError::NonFiniteInput { .. } => "DIST_004",
            DistanceError::Overflow { .. } => "DIST_005",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = DistanceError::dimension_mismatch(4, 3);
        let msg = err.to_string();
        assert!(msg.contains("aligned length is 4"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            DistanceError::dimension_mismatch(1, 2),
            DistanceError::NumericDomain {
                quadratic_form: -1.0,
            },
            DistanceError::NotSquare { rows: 2, cols: 3 },
            DistanceError::NonFiniteInput { what: "seq1" },
            DistanceError::Overflow { what: "delta" },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_numeric_domain_reports_value() {
        let err = DistanceError::NumericDomain {
            quadratic_form: -2.5,
        };
        assert!(err.to_string().contains("-2.5"));
    }
}
