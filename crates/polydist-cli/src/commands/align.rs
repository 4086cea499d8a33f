//! Align command implementation
//!
//! Zero-pads two comma-separated coefficient lists to a common length.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use polydist_core::align;

use super::distance::format_coeffs;
use crate::json_output::{error_codes, AlignOutput, JsonError};

/// Run the align command
///
/// # Arguments
/// * `a` - First coefficient list, e.g. `"1,2,3"`
/// * `b` - Second coefficient list
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(a: &str, b: &str, json_output: bool) -> Result<ExitCode> {
    let (a, b) = match parse_pair(a, b) {
        Ok(pair) => pair,
        Err(e) if json_output => {
            let error = JsonError::new(error_codes::COEFFICIENT_PARSE, format!("{:#}", e));
            let output = AlignOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    let (left, right) = align(&a, &b);

    if json_output {
        let output = AlignOutput::success(left, right);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Aligned length:".cyan().bold(), left.len());
        println!("  {} {}", "A:".dimmed(), format_coeffs(&left));
        println!("  {} {}", "B:".dimmed(), format_coeffs(&right));
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_pair(a: &str, b: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let a = parse_coefficients(a).context("Invalid coefficients for A")?;
    let b = parse_coefficients(b).context("Invalid coefficients for B")?;
    Ok((a, b))
}

/// Parses a comma-separated list of numbers. Blank input is the empty list.
pub fn parse_coefficients(input: &str) -> Result<Vec<f64>> {
    let trimmed = input.trim().trim_start_matches('[').trim_end_matches(']');
    if trimmed.trim().is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", part))
        })
        .collect()
}
