//! Corrected LUT assembly.

use crate::calibration::curve::ResponseModel;

/// One grid point of the corrected calibration curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LutEntry {
    /// Input code value on the even grid, in [0, 1].
    pub input: f64,
    /// Code value to drive the display with instead, in [0, 1].
    pub output: f64,
}

/// Builds the corrected 1D LUT over `lut_size` evenly spaced grid points.
///
/// For each grid point the forward curve yields the luminance a calibrated
/// display should emit there, and the inverse measured curve yields the
/// code value that actually produces that luminance on this display.
/// Interpolation overshoot is clamped back into the valid [0, 1] signal
/// range. `lut_size` must be at least 2; the configuration layer enforces
/// this before the core runs.
pub fn build_lut(lut_size: usize, model: &ResponseModel) -> Vec<LutEntry> {
    let step = (lut_size - 1) as f64;

    (0..lut_size)
        .map(|i| {
            let input = i as f64 / step;
            let desired_nits = model.target.eval(input);
            let raw_code = model.inverse.eval(desired_nits);
            LutEntry {
                input,
                output: raw_code.clamp(0.0, 1.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{pq_target_nits, Measurement};
    use approx::assert_relative_eq;

    fn model(pairs: &[(f64, f64)], peak: f64) -> ResponseModel {
        let measurements: Vec<Measurement> = pairs
            .iter()
            .map(|&(percent, nits)| Measurement { percent, nits })
            .collect();
        ResponseModel::from_measurements(&measurements, peak).unwrap()
    }

    #[test]
    fn test_grid_shape() {
        let model = model(&[(0.0, 0.0), (50.0, 100.0), (100.0, 500.0)], 500.0);
        let lut = build_lut(11, &model);

        assert_eq!(lut.len(), 11);
        assert_eq!(lut[0].input, 0.0);
        assert_eq!(lut[10].input, 1.0);
        for (i, entry) in lut.iter().enumerate() {
            assert_relative_eq!(entry.input, i as f64 / 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_outputs_stay_in_signal_range() {
        // A display that undershoots badly at the top forces the inverse
        // curve to its upper boundary; outputs must still stay in [0, 1].
        let model = model(&[(0.0, 0.05), (40.0, 20.0), (100.0, 180.0)], 4000.0);
        for entry in build_lut(64, &model) {
            assert!(
                (0.0..=1.0).contains(&entry.output),
                "output {} escaped [0, 1] at input {}",
                entry.output,
                entry.input
            );
        }
    }

    #[test]
    fn test_three_point_boundary_scenario() {
        let model = model(&[(0.0, 0.0), (50.0, 100.0), (100.0, 500.0)], 500.0);
        let lut = build_lut(3, &model);

        assert_eq!(lut[0].input, 0.0);
        assert_eq!(lut[1].input, 0.5);
        assert_eq!(lut[2].input, 1.0);

        // Reconstruct both interpolants by hand. Targets at the sample
        // codes are the clamped PQ ideals; the measured curve maps
        // 0/100/500 nits to codes 0/0.5/1.
        let mid_target = pq_target_nits(50.0).unwrap().clamp(0.0, 500.0);
        assert!(mid_target < 100.0, "mid target {} should sit below 100 nits", mid_target);
        let expected_mid_code = (mid_target - 0.0) / (100.0 - 0.0) * 0.5;

        assert_relative_eq!(lut[0].output, 0.0, epsilon = 1e-6);
        assert_relative_eq!(lut[1].output, expected_mid_code, epsilon = 1e-6);
        assert_relative_eq!(lut[2].output, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_identity_when_display_matches_targets() {
        // Measured response already equals the PQ ideal at every sample,
        // so correction leaves the sample grid points alone. The peak sits
        // at the reference maximum so no two targets collapse by clamping.
        let peak = 10000.0;
        let pairs: Vec<(f64, f64)> = [0.0, 25.0, 50.0, 75.0, 100.0]
            .iter()
            .map(|&p| (p, pq_target_nits(p).unwrap().clamp(0.0, peak)))
            .collect();
        let model = model(&pairs, peak);

        let lut = build_lut(5, &model);
        for entry in &lut {
            assert_relative_eq!(entry.output, entry.input, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let model = model(&[(0.0, 0.0), (25.0, 4.0), (50.0, 100.0), (100.0, 480.0)], 500.0);
        let first = build_lut(256, &model);
        let second = build_lut(256, &model);
        assert_eq!(first, second);
    }
}
