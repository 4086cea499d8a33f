//! Property-based tests for alignment and distance using proptest.
//!
//! ```bash
//! cargo test -p polydist-core --test distance_properties
//! ```

use proptest::prelude::*;

use polydist_core::{align, mahalanobis_distance, DistanceError, PrecisionMatrix};

/// Coefficient vectors of modest size and magnitude.
fn coeffs() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 0..8)
}

/// Builds a positive-definite matrix as `AᵀA + I` from arbitrary entries.
fn spd_matrix(n: usize, entries: &[f64]) -> PrecisionMatrix {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let dot: f64 = (0..n)
                        .map(|k| entries[k * n + i] * entries[k * n + j])
                        .sum();
                    if i == j {
                        dot + 1.0
                    } else {
                        dot
                    }
                })
                .collect()
        })
        .collect();
    PrecisionMatrix::from_rows(&rows).unwrap()
}

// ============================================================================
// Alignment
// ============================================================================

proptest! {
    /// Both outputs share the longer input's length.
    #[test]
    fn align_length_is_max(a in coeffs(), b in coeffs()) {
        let (pa, pb) = align(&a, &b);
        prop_assert_eq!(pa.len(), a.len().max(b.len()));
        prop_assert_eq!(pb.len(), a.len().max(b.len()));
    }

    /// Original elements are preserved and padding is exactly zero.
    #[test]
    fn align_preserves_prefix(a in coeffs(), b in coeffs()) {
        let (pa, pb) = align(&a, &b);
        prop_assert_eq!(&pa[..a.len()], &a[..]);
        prop_assert_eq!(&pb[..b.len()], &b[..]);
        prop_assert!(pa[a.len()..].iter().all(|&x| x == 0.0));
        prop_assert!(pb[b.len()..].iter().all(|&x| x == 0.0));
    }

    /// Aligning a sequence with itself is the identity.
    #[test]
    fn align_self_unchanged(a in coeffs()) {
        let (pa, pb) = align(&a, &a);
        prop_assert_eq!(&pa, &a);
        prop_assert_eq!(&pb, &a);
    }
}

// ============================================================================
// Distance
// ============================================================================

proptest! {
    /// Identical inputs are at distance zero.
    #[test]
    fn distance_to_self_is_zero(
        a in prop::collection::vec(-100.0f64..100.0, 1..6),
        entries in prop::collection::vec(-2.0f64..2.0, 36),
    ) {
        let m = spd_matrix(a.len(), &entries);
        prop_assert_eq!(mahalanobis_distance(&a, &a, &m).unwrap(), 0.0);
    }

    /// Swapping arguments does not change the distance.
    #[test]
    fn distance_is_symmetric(
        a in coeffs(),
        b in coeffs(),
        entries in prop::collection::vec(-2.0f64..2.0, 64),
    ) {
        let n = a.len().max(b.len());
        let m = spd_matrix(n, &entries);
        let ab = mahalanobis_distance(&a, &b, &m).unwrap();
        let ba = mahalanobis_distance(&b, &a, &m).unwrap();
        prop_assert!((ab - ba).abs() <= 1e-9 * (1.0 + ab));
    }

    /// Under the identity metric the distance is the Euclidean norm of the
    /// padded difference.
    #[test]
    fn identity_matches_euclidean(a in coeffs(), b in coeffs()) {
        let (pa, pb) = align(&a, &b);
        let euclid = pa
            .iter()
            .zip(&pb)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt();
        let d = mahalanobis_distance(&a, &b, &PrecisionMatrix::identity(pa.len())).unwrap();
        prop_assert!((d - euclid).abs() <= 1e-9 * (1.0 + euclid));
    }

    /// Any matrix whose size differs from the aligned length is rejected.
    #[test]
    fn wrong_dimension_rejected(a in coeffs(), b in coeffs(), extra in 1usize..4) {
        let n = a.len().max(b.len());
        let err = mahalanobis_distance(&a, &b, &PrecisionMatrix::identity(n + extra)).unwrap_err();
        prop_assert_eq!(err, DistanceError::dimension_mismatch(n, n + extra));
    }
}
