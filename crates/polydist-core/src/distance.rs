//! Mahalanobis distance between coefficient sequences.
//!
//! The pipeline is fixed: zero-pad both inputs to a common length, take the
//! difference, evaluate `deltaᵀ · M · delta`, take the square root.

use nalgebra::DVector;

use crate::align::AlignedPair;
use crate::error::{DistanceError, DistanceResult};
use crate::matrix::PrecisionMatrix;

/// Relative slack below zero that is still treated as rounding noise.
///
/// The bound is scaled by `n · max|M| · ‖delta‖²`, which caps the magnitude of
/// the quadratic form.
pub const NEGATIVE_TOLERANCE: f64 = 1e-12;

/// Computes the Mahalanobis distance between two coefficient sequences.
///
/// # Errors
///
/// - [`DistanceError::DimensionMismatch`] if `precision` is not L x L, where
///   L is the longer input's length.
/// - [`DistanceError::NumericDomain`] if the quadratic form is negative.
/// - [`DistanceError::NonFiniteInput`] if any input holds NaN or infinity.
/// - [`DistanceError::Overflow`] if the computation exceeds the `f64` range.
pub fn mahalanobis_distance(
    a: &[f64],
    b: &[f64],
    precision: &PrecisionMatrix,
) -> DistanceResult<f64> {
    squared_distance(a, b, precision).map(f64::sqrt)
}

/// Computes `deltaᵀ · M · delta` for the aligned inputs.
///
/// Same checks as [`mahalanobis_distance`]; the result is never negative.
pub fn squared_distance(a: &[f64], b: &[f64], precision: &PrecisionMatrix) -> DistanceResult<f64> {
    squared_distance_aligned(&AlignedPair::new(a, b), precision)
}

/// Computes `deltaᵀ · M · delta` for a pair that is already aligned.
///
/// # Errors
///
/// Everything [`mahalanobis_distance`] reports, plus
/// [`DistanceError::Overflow`] when `delta` or the quadratic form leaves the
/// finite range even though every input is finite.
pub fn squared_distance_aligned(
    pair: &AlignedPair,
    precision: &PrecisionMatrix,
) -> DistanceResult<f64> {
    check_finite(&pair.left, "seq1")?;
    check_finite(&pair.right, "seq2")?;
    if !precision.is_finite() {
        return Err(DistanceError::NonFiniteInput {
            what: "precision matrix",
        });
    }

    if precision.dimension() != pair.len() {
        tracing::debug!(
            aligned = pair.len(),
            matrix = precision.dimension(),
            "rejecting precision matrix"
        );
        return Err(DistanceError::dimension_mismatch(
            pair.len(),
            precision.dimension(),
        ));
    }

    let delta = DVector::from_vec(pair.delta());
    if !delta.iter().all(|d| d.is_finite()) {
        return Err(DistanceError::Overflow { what: "delta" });
    }
    let q = precision.quadratic_form(&delta);
    if q.is_nan() || q == f64::INFINITY {
        return Err(DistanceError::Overflow {
            what: "quadratic form",
        });
    }
    clamp_rounding(q, &delta, precision)
}

fn check_finite(coeffs: &[f64], what: &'static str) -> DistanceResult<()> {
    if coeffs.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(DistanceError::NonFiniteInput { what })
    }
}

/// `q` is not NaN or `+inf` here. A `-inf` or an overflowing `scale` is never
/// treated as rounding noise.
fn clamp_rounding(q: f64, delta: &DVector<f64>, precision: &PrecisionMatrix) -> DistanceResult<f64> {
    if q >= 0.0 {
        return Ok(q);
    }
    let scale = delta.len() as f64 * precision.max_abs() * delta.norm_squared();
    if q.is_finite() && scale.is_finite() && q >= -NEGATIVE_TOLERANCE * scale {
        return Ok(0.0);
    }
    tracing::debug!(quadratic_form = q, "precision matrix is not PSD");
    Err(DistanceError::NumericDomain { quadratic_form: q })
}

/// Distance calculator bound to a single precision matrix.
///
/// Useful when many polynomial pairs are compared under the same metric.
#[derive(Debug, Clone)]
pub struct DistanceEngine {
    precision: PrecisionMatrix,
}

impl DistanceEngine {
    /// Creates an engine for the given metric.
    pub fn new(precision: PrecisionMatrix) -> Self {
        Self { precision }
    }

    /// Engine whose distance is the plain Euclidean norm over `n` coefficients.
    pub fn euclidean(n: usize) -> Self {
        Self::new(PrecisionMatrix::identity(n))
    }

    /// Aligned length this engine accepts.
    pub fn dimension(&self) -> usize {
        self.precision.dimension()
    }

    /// See [`mahalanobis_distance`].
    pub fn distance(&self, a: &[f64], b: &[f64]) -> DistanceResult<f64> {
        mahalanobis_distance(a, b, &self.precision)
    }

    /// See [`squared_distance`].
    pub fn squared_distance(&self, a: &[f64], b: &[f64]) -> DistanceResult<f64> {
        squared_distance(a, b, &self.precision)
    }
}
