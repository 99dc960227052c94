//! Magnetic variation from a pair of heading readings
//!
//! Variation is magnetic heading minus true heading. Readings taken either side
//! of north (for example true 350°, magnetic 5°) produce an apparent difference
//! near ±360°. Any difference larger than the wraparound threshold (90° by
//! default) is treated as such a straddle and recomputed as the sum of the two
//! distances to the seam. Genuine variations above the threshold are therefore
//! misread; real-world values rarely exceed 30°.

use crate::core::constants::DEFAULT_WRAPAROUND_THRESHOLD_DEG;
use crate::core::HeadingSample;
use serde::{Deserialize, Serialize};

/// Which branch produced a variation value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WraparoundCase {
    /// Headings on the same side of north
    SameSide,
    /// Magnetic just below 360°, true just above 0°
    Western,
    /// Magnetic just above 0°, true just below 360°
    Eastern,
}

/// Stateless variation estimator with a configurable wraparound threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticVariationEstimator {
    wraparound_threshold_deg: f64,
}

impl MagneticVariationEstimator {
    pub fn new(wraparound_threshold_deg: f64) -> Self {
        Self { wraparound_threshold_deg }
    }

    pub fn wraparound_threshold_deg(&self) -> f64 {
        self.wraparound_threshold_deg
    }

    /// Signed variation in degrees. Inputs are not validated.
    pub fn compute_variation(&self, true_heading: f64, mag_heading: f64) -> f64 {
        self.compute_with_case(true_heading, mag_heading).0
    }

    /// Variation for a heading sample
    pub fn estimate(&self, sample: &HeadingSample) -> f64 {
        self.compute_variation(sample.true_heading, sample.mag_heading)
    }

    /// Variation together with the branch that produced it
    pub fn compute_with_case(&self, true_heading: f64, mag_heading: f64) -> (f64, WraparoundCase) {
        let difference = mag_heading - true_heading;

        if difference > self.wraparound_threshold_deg {
            let mag_to_seam = (mag_heading - 360.0).abs();
            let true_to_seam = (0.0 - true_heading).abs();
            (-(mag_to_seam + true_to_seam), WraparoundCase::Western)
        } else if difference < -self.wraparound_threshold_deg {
            let mag_to_seam = (0.0 - mag_heading).abs();
            let true_to_seam = (true_heading - 360.0).abs();
            (mag_to_seam + true_to_seam, WraparoundCase::Eastern)
        } else {
            (difference, WraparoundCase::SameSide)
        }
    }
}

impl Default for MagneticVariationEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_WRAPAROUND_THRESHOLD_DEG)
    }
}

/// Signed magnetic variation using the default 90° wraparound threshold
pub fn compute_variation(true_heading: f64, mag_heading: f64) -> f64 {
    MagneticVariationEstimator::default().compute_variation(true_heading, mag_heading)
}
