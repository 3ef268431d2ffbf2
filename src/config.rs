//! Calibration run configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calibration::Measurement;

/// Default title written into the .cal DESCRIPTOR field.
pub const DEFAULT_TITLE: &str = "PQ Calibration LUT";

/// Parameters for one calibration run, loaded from a JSON file.
///
/// The measurement list is kept as raw `[percent, nits]` pairs, matching
/// how measurement runs are recorded by hand from a colorimeter readout.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Actual peak luminance of the display in nits.
    pub peak_luminance: f64,
    /// Number of grid points in the generated LUT (NUMBER_OF_SETS).
    pub lut_size: usize,
    /// Path the .cal file is written to.
    pub filename_cal: PathBuf,
    /// Measured [PQ %, nits] pairs.
    pub measurements: Vec<(f64, f64)>,
    /// Optional descriptor title for the generated LUT.
    #[serde(default)]
    pub title: Option<String>,
}

impl Config {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Configuration error in {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.peak_luminance.is_nan() || self.peak_luminance <= 0.0 {
            anyhow::bail!(
                "'peak_luminance' must be greater than 0, got {}",
                self.peak_luminance
            );
        }
        if self.lut_size < 2 {
            anyhow::bail!("'lut_size' must be at least 2, got {}", self.lut_size);
        }
        if let Some(&(percent, nits)) = self.measurements.iter().find(|&&(_, nits)| nits < 0.0) {
            anyhow::bail!(
                "measurement at {}% reports a negative luminance of {} nits",
                percent,
                nits
            );
        }
        Ok(())
    }

    /// Measurements as core samples, in the order they were recorded.
    pub fn samples(&self) -> Vec<Measurement> {
        self.measurements
            .iter()
            .map(|&(percent, nits)| Measurement { percent, nits })
            .collect()
    }

    /// Descriptor title, falling back to the default.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_full_config_parses() {
        let config = parse(
            r#"{
                "peak_luminance": 500.0,
                "lut_size": 256,
                "filename_cal": "out.cal",
                "measurements": [[0, 0], [50, 100.5], [100, 480]],
                "title": "Living room OLED"
            }"#,
        )
        .unwrap();

        assert_eq!(config.lut_size, 256);
        assert_eq!(config.title(), "Living room OLED");
        let samples = config.samples();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].nits, 100.5);
    }

    #[test]
    fn test_title_defaults() {
        let config = parse(
            r#"{"peak_luminance": 500, "lut_size": 2, "filename_cal": "o.cal", "measurements": [[0,0],[100,480]]}"#,
        )
        .unwrap();
        assert_eq!(config.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let err = parse(
            r#"{"lut_size": 2, "filename_cal": "o.cal", "measurements": [[0,0],[100,480]]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("peak_luminance"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse(
            r#"{"peak_luminance": 0, "lut_size": 2, "filename_cal": "o.cal", "measurements": [[0,0],[100,480]]}"#,
        )
        .is_err());

        assert!(parse(
            r#"{"peak_luminance": 500, "lut_size": 1, "filename_cal": "o.cal", "measurements": [[0,0],[100,480]]}"#,
        )
        .is_err());

        assert!(parse(
            r#"{"peak_luminance": 500, "lut_size": 2, "filename_cal": "o.cal", "measurements": [[0,-1],[100,480]]}"#,
        )
        .is_err());
    }
}
