//! SMPTE ST 2084 (PQ) electro-optical transfer function.

use crate::error::CalibrationError;

// --- Constants for PQ Conversion ---
const ST2084_Y_MAX: f64 = 10000.0;
const ST2084_M1: f64 = 2610.0 / 16384.0;
const ST2084_M2: f64 = (2523.0 / 4096.0) * 128.0;
const ST2084_C1: f64 = 3424.0 / 4096.0;
const ST2084_C2: f64 = (2413.0 / 4096.0) * 32.0;
const ST2084_C3: f64 = (2392.0 / 4096.0) * 32.0;

/// Ideal luminance in nits for a PQ signal level given as a percentage.
///
/// This decodes the ST.2084 EOTF against the 10,000 nit reference peak.
/// Signal levels are accepted as percentages because that is how
/// calibration measurement runs are recorded (0% = black, 100% = full
/// scale).
///
/// The bottom of the curve is numerically degenerate (non-positive
/// denominator or negative base); those inputs decode to 0.0 nits rather
/// than an error, since that is the mathematical floor of the transfer
/// function.
///
/// # Arguments
/// * `code_percentage` - PQ signal level in percent, must be in [0, 100]
///
/// # Returns
/// Luminance in nits (cd/m²), in [0, 10000]
pub fn pq_target_nits(code_percentage: f64) -> Result<f64, CalibrationError> {
    if !(0.0..=100.0).contains(&code_percentage) {
        return Err(CalibrationError::Domain {
            percent: code_percentage,
        });
    }

    let normalized = code_percentage / 100.0;
    let n_pow = normalized.powf(1.0 / ST2084_M2);

    let numerator = n_pow - ST2084_C1;
    let denominator = ST2084_C2 - ST2084_C3 * n_pow;
    if denominator <= 0.0 {
        return Ok(0.0);
    }

    let base = numerator / denominator;
    if base < 0.0 {
        return Ok(0.0);
    }

    Ok(base.powf(1.0 / ST2084_M1) * ST2084_Y_MAX)
}
