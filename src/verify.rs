//! Read-back validation of generated .cal files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Summary of a structurally valid .cal document.
#[derive(Debug)]
pub struct CalSummary {
    pub sets: usize,
}

/// Checks a .cal document for structural integrity: CAL signature, a
/// NUMBER_OF_SETS count matching the data block, four numeric columns per
/// line with a neutral R=G=B correction, inputs evenly spaced over [0, 1]
/// and outputs inside the valid signal range.
pub fn check_cal_text(content: &str) -> Result<CalSummary> {
    let mut lines = content.lines();
    match lines.next() {
        Some("CAL") => {}
        other => anyhow::bail!("expected a CAL signature on the first line, found {:?}", other),
    }

    let mut declared_sets: Option<usize> = None;
    let mut in_data = false;
    let mut saw_end = false;
    let mut rows: Vec<(f64, f64)> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("NUMBER_OF_SETS") {
            declared_sets = Some(
                rest.trim()
                    .parse()
                    .with_context(|| format!("invalid NUMBER_OF_SETS value: {}", rest.trim()))?,
            );
        } else if line == "BEGIN_DATA" {
            in_data = true;
        } else if line == "END_DATA" {
            in_data = false;
            saw_end = true;
        } else if in_data {
            let fields = line
                .split_whitespace()
                .map(|field| field.parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()
                .with_context(|| format!("non-numeric data line: {}", line))?;
            if fields.len() != 4 {
                anyhow::bail!("expected 4 columns per data line, found {}", fields.len());
            }
            if fields[1] != fields[2] || fields[1] != fields[3] {
                anyhow::bail!("RGB columns differ on data line: {}", line);
            }
            rows.push((fields[0], fields[1]));
        }
    }

    let declared = declared_sets.context("missing NUMBER_OF_SETS declaration")?;
    if !saw_end {
        anyhow::bail!("missing END_DATA terminator");
    }
    if rows.len() != declared {
        anyhow::bail!(
            "NUMBER_OF_SETS says {} but the data block has {} lines",
            declared,
            rows.len()
        );
    }
    if rows.len() < 2 {
        anyhow::bail!("a calibration LUT needs at least 2 grid points, found {}", rows.len());
    }

    let step = 1.0 / (rows.len() - 1) as f64;
    for (i, &(input, output)) in rows.iter().enumerate() {
        let expected = i as f64 * step;
        if (input - expected).abs() > 1e-9 {
            anyhow::bail!(
                "grid input {} deviates from even spacing (expected {})",
                input,
                expected
            );
        }
        if !(0.0..=1.0).contains(&output) {
            anyhow::bail!("corrected output {} at input {} escapes [0, 1]", output, input);
        }
    }

    Ok(CalSummary { sets: rows.len() })
}

/// Reads the written file back and validates it, printing a short summary.
pub fn verify_cal_file(path: &Path) -> Result<()> {
    println!("{}", "Verifying generated .cal file...".cyan());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read back {}", path.display()))?;
    let summary = check_cal_text(&content)
        .with_context(|| format!("Validation failed for {}", path.display()))?;

    println!("✓ Header and data format are valid");
    println!("✓ {} grid points, evenly spaced over [0, 1]", summary.sets);
    println!("✓ All corrected outputs within [0, 1]");
    Ok(())
}
