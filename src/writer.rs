//! ArgyllCMS .cal serialization.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use crate::calibration::LutEntry;

/// Tool name recorded in the ORIGINATOR header field.
const ORIGINATOR: &str = "pqcal";

/// Renders a complete .cal document.
///
/// The layout is the ArgyllCMS CAL text format: a keyword header, a four
/// column data format declaration (RGB_I RGB_R RGB_G RGB_B) and one
/// tab-separated data line per grid point, each value with 14 decimal
/// digits. The correction is neutral, so all three channel columns carry
/// the same value.
pub fn render(entries: &[LutEntry], title: &str, created: DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str("CAL\n");
    out.push_str(&format!("DESCRIPTOR \"{}\"\n", title));
    out.push_str(&format!("ORIGINATOR \"{}\"\n", ORIGINATOR));
    out.push_str(&format!(
        "CREATED \"{}\"\n",
        created.format("%a %b %d %H:%M:%S %Y")
    ));
    out.push_str("DEVICE_CLASS \"DISPLAY\"\n");
    out.push_str("COLOR_REP \"RGB\"\n");
    out.push_str("TABLE_RGB_FROM_DISPLAY_PRIMARIES\n");
    out.push_str("NUMBER_OF_FIELDS 4\n");
    out.push_str("BEGIN_DATA_FORMAT\n");
    out.push_str("RGB_I RGB_R RGB_G RGB_B\n");
    out.push_str("END_DATA_FORMAT\n\n");

    out.push_str(&format!("NUMBER_OF_SETS {}\n", entries.len()));
    out.push_str("BEGIN_DATA\n");
    for entry in entries {
        out.push_str(&format!(
            "{:.14}\t{:.14}\t{:.14}\t{:.14}\n",
            entry.input, entry.output, entry.output, entry.output
        ));
    }
    out.push_str("END_DATA\n");

    out
}

/// Writes the .cal file for a generated LUT, stamped with the current UTC time.
pub fn write_cal_file(path: &Path, entries: &[LutEntry], title: &str) -> Result<()> {
    std::fs::write(path, render(entries, title, Utc::now()))
        .with_context(|| format!("Failed to write .cal file {}", path.display()))
}
