use thiserror::Error;

/// Errors produced by the calibration core.
///
/// The core fails fast on invalid input and never recovers locally; the
/// binary decides how to present these to the user.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// A PQ signal level outside the representable range was requested.
    #[error("PQ signal level {percent}% is outside the valid range [0, 100]")]
    Domain { percent: f64 },

    /// Interpolation needs at least two measurement samples.
    #[error("calibration requires at least 2 measurement samples, got {count}")]
    InsufficientData { count: usize },

    /// The measured luminance values collapsed to fewer than two distinct
    /// points, so the measured response cannot be inverted.
    #[error("measured luminance values are not distinct enough to invert the response curve")]
    DegenerateCurve,
}
