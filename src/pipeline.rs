//! End-to-end calibration run: response model, report, LUT, .cal output.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::calibration::{build_lut, ResponseModel};
use crate::cli::Cli;
use crate::config::Config;
use crate::report;
use crate::verify;
use crate::writer;

/// Runs one calibration from a loaded CLI invocation.
///
/// Steps:
/// 1. Load and validate the JSON configuration
/// 2. Build the forward target / inverse measured response model
/// 3. Print the measured-vs-target table
/// 4. Compose the corrected LUT over the output grid
/// 5. Write the ArgyllCMS .cal file (and optionally verify it)
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    println!(
        "Loaded configuration and measurements from {}",
        cli.config.display()
    );

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.filename_cal.clone());
    let title = cli.title.as_deref().unwrap_or_else(|| config.title());

    println!("Target peak luminance: {:.1} nits", config.peak_luminance);
    println!("LUT size: {} points (NUMBER_OF_SETS)", config.lut_size);
    println!("Output LUT file: {}", output_path.display());
    println!();

    let model = ResponseModel::from_measurements(&config.samples(), config.peak_luminance)
        .context("Failed to build the display response model")?;

    report::print_sample_table(&model.samples);

    let lut = build_lut(config.lut_size, &model);

    writer::write_cal_file(&output_path, &lut, title)?;
    println!(
        "{}",
        format!(
            "Successfully generated and saved LUT to: {}",
            output_path.display()
        )
        .green()
    );

    if cli.verify {
        verify::verify_cal_file(&output_path)?;
    }

    Ok(())
}
