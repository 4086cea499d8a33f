//! Zero-padding alignment of coefficient sequences.
//!
//! Coefficients are stored low-to-high by degree, so padding with trailing
//! zeros adds higher-degree terms with zero weight and leaves the polynomial
//! unchanged.

use serde::Serialize;

/// Two coefficient sequences padded to a common length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedPair {
    /// First sequence, padded.
    pub left: Vec<f64>,
    /// Second sequence, padded.
    pub right: Vec<f64>,
}

impl AlignedPair {
    /// Aligns `a` and `b` by appending zeros to the shorter one.
    pub fn new(a: &[f64], b: &[f64]) -> Self {
        let (left, right) = align(a, b);
        Self { left, right }
    }

    /// Common length of both sequences.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if both sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Elementwise `left - right`.
    pub fn delta(&self) -> Vec<f64> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(l, r)| l - r)
            .collect()
    }
}

/// Pads two coefficient sequences with trailing zeros so both have length
/// `max(a.len(), b.len())`.
///
/// Existing elements keep their positions; nothing is truncated.
pub fn align(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let len = a.len().max(b.len());
    if a.len() != b.len() {
        tracing::debug!(left = a.len(), right = b.len(), len, "padding coefficients");
    }
    (pad(a, len), pad(b, len))
}

fn pad(coeffs: &[f64], len: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(coeffs);
    out.resize(len, 0.0);
    out
}
