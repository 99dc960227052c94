//! Core data types for the navigation core

use crate::validation::{NavError, NavResult};
use serde::{Deserialize, Serialize};

/// One heading reading pair, both in degrees clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingSample {
    pub true_heading: f64,
    pub mag_heading: f64,
}

impl HeadingSample {
    pub fn new(true_heading: f64, mag_heading: f64) -> Self {
        Self { true_heading, mag_heading }
    }
}

/// Current aircraft position as reported by the sensor feed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees, positive north
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east
    pub longitude: f64,
    pub altitude_feet: f64,
    pub speed_knots: f64,
}

impl Position {
    /// Position at the given coordinates with zero altitude and speed
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_feet: 0.0,
            speed_knots: 0.0,
        }
    }
}

/// Caller-supplied destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl TargetPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<&Position> for TargetPosition {
    fn from(position: &Position) -> Self {
        Self::new(position.latitude, position.longitude)
    }
}

/// Most recent magnetic variation, in degrees (magnetic minus true)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VariationEstimate {
    pub value: f64,
}

impl VariationEstimate {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// The three values shown on the heading readout
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub mag_heading: f64,
    pub true_heading: f64,
    pub magnetic_variation: f64,
}

/// Range, bearing and course to a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationResult {
    /// Distance to the target in nautical miles
    pub range_nm: f64,
    /// Initial great-circle bearing, degrees true, in [0, 360)
    pub true_bearing_deg: f64,
    /// Reciprocal display bearing; `None` when the course is outside both display bands
    pub bearing_deg: Option<f64>,
    /// Initial bearing corrected by the magnetic variation
    pub course_deg: f64,
}

impl NavigationResult {
    /// Reciprocal display bearing, or an error when the course has none
    pub fn bearing(&self) -> NavResult<f64> {
        self.bearing_deg.ok_or(NavError::InvalidCourse {
            course_deg: self.course_deg,
        })
    }
}
