//! Unit conversions used across the navigation core
//!
//! Forward conversions multiply by the constants in [`crate::core::constants`].
//! Inverse conversions divide by the same constant so that a round trip returns
//! the original value to within floating-point rounding.

use crate::core::constants::{
    METERS_TO_FEET, METERS_TO_NAUTICAL_MILES, MINUTES_PER_HOUR, MPS_TO_KNOTS,
};
use std::f64::consts::PI;

/// Unit conversions on raw `f64` values
pub trait UnitConversions {
    fn radians_to_degrees(self) -> f64;
    fn degrees_to_radians(self) -> f64;
    fn meters_to_feet(self) -> f64;
    fn feet_to_meters(self) -> f64;
    fn meters_to_nautical_miles(self) -> f64;
    fn nautical_miles_to_meters(self) -> f64;
    fn meters_per_second_to_knots(self) -> f64;
    fn knots_to_meters_per_second(self) -> f64;
    /// Knots to nautical miles per minute
    fn knots_to_nm_per_minute(self) -> f64;
}

impl UnitConversions for f64 {
    // Operation order is fixed: `self * 180 / PI` rounds differently from `self * (180 / PI)`.
    fn radians_to_degrees(self) -> f64 {
        self * 180.0 / PI
    }

    fn degrees_to_radians(self) -> f64 {
        self * PI / 180.0
    }

    fn meters_to_feet(self) -> f64 {
        self * METERS_TO_FEET
    }

    fn feet_to_meters(self) -> f64 {
        self / METERS_TO_FEET
    }

    fn meters_to_nautical_miles(self) -> f64 {
        self * METERS_TO_NAUTICAL_MILES
    }

    fn nautical_miles_to_meters(self) -> f64 {
        self / METERS_TO_NAUTICAL_MILES
    }

    fn meters_per_second_to_knots(self) -> f64 {
        self * MPS_TO_KNOTS
    }

    fn knots_to_meters_per_second(self) -> f64 {
        self / MPS_TO_KNOTS
    }

    fn knots_to_nm_per_minute(self) -> f64 {
        self / MINUTES_PER_HOUR
    }
}
