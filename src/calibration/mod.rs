//! Core calibration math: PQ targets, response curves, LUT composition.
//!
//! Everything in this module is a pure computation over in-memory values.
//! File I/O, printing and configuration live in the outer layers.

pub mod curve;
pub mod lut;
pub mod pq;

pub use curve::{Measurement, ResponseModel, SamplePoint};
pub use lut::{build_lut, LutEntry};
pub use pq::pq_target_nits;
