//! Polynomial Mahalanobis distance.
//!
//! This crate compares two polynomials, given as coefficient vectors, under a
//! caller-supplied precision (inverse-covariance) matrix.
//!
//! # Overview
//!
//! - Coefficients are ordered low-to-high by degree.
//! - Sequences of different length are zero-padded to a common length L.
//! - The precision matrix must be L x L.
//! - The distance is `sqrt(deltaᵀ · M · delta)` with `delta = a - b`.
//!
//! # Example
//!
//! ```
//! use polydist_core::{mahalanobis_distance, PrecisionMatrix};
//!
//! let precision = PrecisionMatrix::from_rows(&[
//!     vec![1.2, 0.3, 0.1, 0.0],
//!     vec![0.3, 0.8, 0.2, 0.1],
//!     vec![0.1, 0.2, 1.0, 0.2],
//!     vec![0.0, 0.1, 0.2, 0.9],
//! ])
//! .unwrap();
//!
//! let d = mahalanobis_distance(&[1.0, 2.0, 3.0], &[4.0, 0.0, 0.0, 2.0], &precision).unwrap();
//! assert_eq!(format!("{:.4}", d), "4.5166");
//! ```
//!
//! # Modules
//!
//! - [`align`]: Zero-padding alignment
//! - [`distance`]: Distance computation and [`DistanceEngine`]
//! - [`error`]: Error types
//! - [`matrix`]: [`PrecisionMatrix`]
//! - [`request`]: JSON request loading and reports

pub mod align;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod request;

pub use align::{align, AlignedPair};
pub use distance::{
    mahalanobis_distance, squared_distance, squared_distance_aligned, DistanceEngine,
    NEGATIVE_TOLERANCE,
};
pub use error::{DistanceError, DistanceResult};
pub use matrix::PrecisionMatrix;
pub use request::{DistanceReport, DistanceRequest, RequestError};
