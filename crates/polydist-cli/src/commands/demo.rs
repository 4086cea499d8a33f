//! Demo command implementation
//!
//! Evaluates a fixed worked example: `3x² + 2x + 1` against `2x³ + 4` under a
//! sample 4x4 precision matrix.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use std::process::ExitCode;

use polydist_core::DistanceRequest;

use super::distance::{format_coeffs, render_report};
use crate::json_output::DistanceOutput;

/// The built-in example request.
pub fn example_request() -> DistanceRequest {
    DistanceRequest {
        poly1: vec![1.0, 2.0, 3.0],
        poly2: vec![4.0, 0.0, 0.0, 2.0],
        inv_cov: vec![
            vec![1.2, 0.3, 0.1, 0.0],
            vec![0.3, 0.8, 0.2, 0.1],
            vec![0.1, 0.2, 1.0, 0.2],
            vec![0.0, 0.1, 0.2, 0.9],
        ],
    }
}

/// Run the demo command
pub fn run(json_output: bool) -> Result<ExitCode> {
    print!("{}", render(json_output)?);
    Ok(ExitCode::SUCCESS)
}

/// Builds the demo output as colored text or a JSON document.
pub fn render(json_output: bool) -> Result<String> {
    let request = example_request();
    let report = request.evaluate()?;

    if json_output {
        let output = DistanceOutput::success(report);
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    let mut out = String::new();
    writeln!(out, "{}", "Example polynomials:".cyan().bold())?;
    writeln!(out, "  {} {}", "poly1:".dimmed(), format_coeffs(&request.poly1))?;
    writeln!(out, "  {} {}", "poly2:".dimmed(), format_coeffs(&request.poly2))?;
    out.push_str(&render_report(&report));
    Ok(out)
}
