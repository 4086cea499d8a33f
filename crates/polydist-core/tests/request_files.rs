//! Request file loading and evaluation tests.

use std::fs;

use polydist_core::{DistanceRequest, RequestError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_request(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_worked_example_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        "example.json",
        r#"{
            "poly1": [1, 2, 3],
            "poly2": [4, 0, 0, 2],
            "inv_cov": [[1.2, 0.3, 0.1, 0.0],
                        [0.3, 0.8, 0.2, 0.1],
                        [0.1, 0.2, 1.0, 0.2],
                        [0.0, 0.1, 0.2, 0.9]]
        }"#,
    );

    let report = DistanceRequest::from_file(&path).unwrap().evaluate().unwrap();
    assert_eq!(report.delta, vec![-3.0, 2.0, 3.0, -2.0]);
    assert_eq!(format!("{:.4}", report.distance), "4.5166");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = DistanceRequest::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RequestError::Io(_)));
    assert_eq!(err.code(), "REQ_002");
}

#[test]
fn test_non_psd_matrix_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_request(
        &dir,
        "bad.json",
        r#"{"poly1": [1, 1], "poly2": [], "inv_cov": [[1, 3], [3, 1]]}"#,
    );

    // Indefinite matrix: delta [1, 1] gives q = 8, delta [1, -1] gives q = -4.
    let report = DistanceRequest::from_file(&path).unwrap().evaluate().unwrap();
    assert_eq!(report.squared_distance, 8.0);

    let path = write_request(
        &dir,
        "bad2.json",
        r#"{"poly1": [1, -1], "poly2": [], "inv_cov": [[1, 3], [3, 1]]}"#,
    );
    let err = DistanceRequest::from_file(&path).unwrap().evaluate().unwrap_err();
    assert_eq!(err.code(), "DIST_002");
}

#[test]
fn test_empty_request() {
    let request = DistanceRequest::from_json(r#"{"poly1": [], "poly2": [], "inv_cov": []}"#).unwrap();
    let report = request.evaluate().unwrap();
    assert!(report.aligned.is_empty());
    assert_eq!(report.distance, 0.0);
}
