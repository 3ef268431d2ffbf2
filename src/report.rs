//! Console report of measured vs target luminance.

use crate::calibration::SamplePoint;

/// Prints the per-sample table in code-value order: input level, what the
/// display produced, and what it should produce once calibrated.
pub fn print_sample_table(samples: &[SamplePoint]) {
    println!(
        "{:<10} | {:<20} | {:<28}",
        "Input %", "Measured Y (nits)", "Calculated Target Y (nits)"
    );
    println!("{}-+-{}-+-{}", "-".repeat(10), "-".repeat(20), "-".repeat(28));
    for sample in samples {
        println!(
            "{:<10.1} | {:<20.3} | {:<28.3}",
            sample.percent, sample.measured_nits, sample.target_nits
        );
    }
    println!(
        "{}-+-{}-+-{}\n",
        "-".repeat(10),
        "-".repeat(20),
        "-".repeat(28)
    );
}
