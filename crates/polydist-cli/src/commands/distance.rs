//! Distance command implementation
//!
//! Loads a JSON request file and prints the Mahalanobis distance between the
//! two polynomials it contains.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;
use std::process::ExitCode;

use polydist_core::{DistanceReport, DistanceRequest};

use crate::json_output::{DistanceOutput, JsonError};

/// Run the distance command
///
/// # Arguments
/// * `input` - Path to the request file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let (text, code) = render_json(input)?;
        println!("{}", text);
        Ok(code)
    } else {
        print!("{}", render_human(input)?);
        Ok(ExitCode::SUCCESS)
    }
}

/// Builds the colored text output for a request file.
pub fn render_human(input: &str) -> Result<String> {
    tracing::debug!(input, "loading request");
    let request = DistanceRequest::from_file(Path::new(input))
        .with_context(|| format!("Failed to load request: {}", input))?;
    let report = request.evaluate()?;

    let mut out = String::new();
    writeln!(out, "{} {}", "Request:".cyan().bold(), input)?;
    out.push_str(&render_report(&report));
    Ok(out)
}

/// Builds the JSON document for a request file and the matching exit code.
///
/// Load and evaluation failures become a failure document, not an `Err`.
pub fn render_json(input: &str) -> Result<(String, ExitCode)> {
    let outcome = DistanceRequest::from_file(Path::new(input)).and_then(|r| r.evaluate());

    let (output, code) = match outcome {
        Ok(report) => (DistanceOutput::success(report), ExitCode::SUCCESS),
        Err(e) => (
            DistanceOutput::failure(vec![JsonError::from(&e).with_file(input)]),
            ExitCode::from(1),
        ),
    };
    Ok((serde_json::to_string_pretty(&output)?, code))
}

/// Formats a report as colored text, ending with the distance line.
pub fn render_report(report: &DistanceReport) -> String {
    let mut lines = vec![
        format!("  {} {}", "Aligned A:".dimmed(), format_coeffs(&report.aligned.left)),
        format!("  {} {}", "Aligned B:".dimmed(), format_coeffs(&report.aligned.right)),
        format!("  {} {}", "Delta:".dimmed(), format_coeffs(&report.delta)),
    ];
    if !report.symmetric {
        lines.push(format!(
            "  {}",
            "warning: precision matrix is not symmetric".yellow()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} {:.4}",
        "Mahalanobis distance between the polynomials:".green().bold(),
        report.distance
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub(crate) fn format_coeffs(coeffs: &[f64]) -> String {
    let parts: Vec<String> = coeffs.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
