//! Empirical display response modelling from sparse measurements.

use crate::calibration::pq::pq_target_nits;
use crate::error::CalibrationError;

/// A single luminance reading taken at a PQ signal level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// PQ signal level as a percentage of full scale [0, 100].
    pub percent: f64,
    /// Luminance the display actually produced, in nits.
    pub nits: f64,
}

/// One measurement after normalization, paired with its clamped PQ target.
///
/// These are kept in code-value order so the caller can report
/// measured-vs-target luminance without redoing the association.
#[derive(Debug, Clone, Copy)]
pub struct SamplePoint {
    /// Original signal level in percent.
    pub percent: f64,
    /// Luminance the display produced at that level, in nits.
    pub measured_nits: f64,
    /// Ideal PQ luminance at that level, clamped to the display peak.
    pub target_nits: f64,
}

/// Piecewise-linear interpolant over a non-decreasing knot domain.
///
/// Inputs beyond the first or last knot clamp to the boundary value (flat
/// extrapolation), which is the behavior calibration needs at the ends of
/// the measured range: there is no data to extrapolate into, so the curve
/// holds its last known value.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Curve {
    /// Builds a curve from parallel knot arrays. `xs` must already be
    /// sorted non-decreasing.
    fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.len() >= 2);
        Self { xs, ys }
    }

    /// Evaluates the interpolant at `x` with flat extrapolation.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        // First knot strictly above x; x is interior so 1 <= hi <= last.
        let hi = self.xs.partition_point(|&knot| knot <= x);
        let lo = hi - 1;

        let span = self.xs[hi] - self.xs[lo];
        if span == 0.0 {
            return self.ys[lo];
        }
        let t = (x - self.xs[lo]) / span;
        self.ys[lo] + (self.ys[hi] - self.ys[lo]) * t
    }
}

/// Forward target and inverse measured response curves built from one
/// measurement run.
#[derive(Debug, Clone)]
pub struct ResponseModel {
    /// Code value in [0, 1] -> ideal PQ luminance clamped to the peak.
    pub target: Curve,
    /// Measured luminance in nits -> code value in [0, 1].
    pub inverse: Curve,
    /// Normalized samples in code-value order, for reporting.
    pub samples: Vec<SamplePoint>,
}

impl ResponseModel {
    /// Builds both interpolants from raw measurements.
    ///
    /// Samples are normalized, associated with their peak-clamped PQ
    /// targets, and stable-sorted by code value, so the result does not
    /// depend on the order the measurements were taken in.
    pub fn from_measurements(
        measurements: &[Measurement],
        peak_luminance: f64,
    ) -> Result<Self, CalibrationError> {
        if measurements.len() < 2 {
            return Err(CalibrationError::InsufficientData {
                count: measurements.len(),
            });
        }

        let mut samples = Vec::with_capacity(measurements.len());
        for m in measurements {
            let ideal = pq_target_nits(m.percent)?;
            samples.push(SamplePoint {
                percent: m.percent,
                measured_nits: m.nits,
                target_nits: ideal.clamp(0.0, peak_luminance),
            });
        }

        // Stable sort: ties in code value keep measurement order.
        samples.sort_by(|a, b| {
            a.percent
                .partial_cmp(&b.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let code: Vec<f64> = samples.iter().map(|s| s.percent / 100.0).collect();
        let target: Vec<f64> = samples.iter().map(|s| s.target_nits).collect();

        // The inverse interpolant keys on measured nits, so each distinct
        // luminance may appear only once: the first occurrence in
        // code-value order wins.
        let mut inverse: Vec<(f64, f64)> = Vec::with_capacity(samples.len());
        for (i, s) in samples.iter().enumerate() {
            if !inverse.iter().any(|&(nits, _)| nits == s.measured_nits) {
                inverse.push((s.measured_nits, code[i]));
            }
        }
        if inverse.len() < 2 {
            return Err(CalibrationError::DegenerateCurve);
        }
        inverse.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let inv_nits: Vec<f64> = inverse.iter().map(|&(nits, _)| nits).collect();
        let inv_code: Vec<f64> = inverse.iter().map(|&(_, code)| code).collect();

        Ok(Self {
            target: Curve::new(code, target),
            inverse: Curve::new(inv_nits, inv_code),
            samples,
        })
    }
}
