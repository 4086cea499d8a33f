//! Precision (inverse-covariance) matrix wrapper.

use nalgebra::{DMatrix, DVector};

use crate::error::{DistanceError, DistanceResult};

/// A square precision matrix over coefficient space.
///
/// Squareness is enforced on construction. Symmetry and positive
/// semi-definiteness are not; a matrix that is not PSD surfaces as
/// [`DistanceError::NumericDomain`] once a distance is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionMatrix(DMatrix<f64>);

impl PrecisionMatrix {
    /// Builds a matrix from row vectors.
    ///
    /// An empty slice yields the 0x0 matrix, which pairs with two empty
    /// coefficient sequences.
    pub fn from_rows(rows: &[Vec<f64>]) -> DistanceResult<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(DistanceError::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Self(DMatrix::from_row_slice(n, n, &flat)))
    }

    /// Wraps an existing nalgebra matrix.
    pub fn from_matrix(matrix: DMatrix<f64>) -> DistanceResult<Self> {
        if matrix.nrows() != matrix.ncols() {
            return Err(DistanceError::NotSquare {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Ok(Self(matrix))
    }

    /// The n x n identity, under which the distance is Euclidean.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.0.nrows()
    }

    /// Borrows the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Returns true if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Returns true if `|m[i][j] - m[j][i]| <= tolerance` for all entries.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (i + 1..n).all(|j| (self.0[(i, j)] - self.0[(j, i)]).abs() <= tolerance))
    }

    /// Largest absolute entry, 0 for the empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Computes `vᵀ · M · v`.
    ///
    /// The caller guarantees `v.len() == self.dimension()`.
    pub fn quadratic_form(&self, v: &DVector<f64>) -> f64 {
        v.dot(&(&self.0 * v))
    }
}
