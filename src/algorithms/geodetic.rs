//! Range, bearing and course on a WGS84-corrected sphere
//!
//! The central angle comes from the spherical law of cosines and is scaled by an
//! ellipsoid radius-of-curvature factor evaluated at the origin latitude:
//!
//! ```text
//! factor = 1 / (cos(lat1) * sqrt(1/a^2 + tan^2(lat1)/b^2))
//! ```
//!
//! which equals `a` on the equator and approaches `b` at the poles.

use crate::core::constants::{
    SENTINEL_BEARING, WGS84_SEMI_MAJOR_AXIS_M, WGS84_SEMI_MINOR_AXIS_M,
};
use crate::core::{NavigationResult, Position, TargetPosition, UnitConversions};
use tracing::warn;

/// Range/bearing/course calculator for a given reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticNavigator {
    semi_major_axis_m: f64,
    semi_minor_axis_m: f64,
    normalize_course: bool,
}

impl GeodeticNavigator {
    /// Navigator on a custom ellipsoid
    pub fn new(semi_major_axis_m: f64, semi_minor_axis_m: f64) -> Self {
        Self {
            semi_major_axis_m,
            semi_minor_axis_m,
            normalize_course: false,
        }
    }

    /// Navigator on the WGS84 ellipsoid
    pub fn wgs84() -> Self {
        Self::new(WGS84_SEMI_MAJOR_AXIS_M, WGS84_SEMI_MINOR_AXIS_M)
    }

    /// Wrap the course back into [0, 360) after the variation is added.
    ///
    /// Off by default: the course is reported exactly as `bearing + variation`.
    pub fn with_course_normalization(mut self, enabled: bool) -> Self {
        self.normalize_course = enabled;
        self
    }

    pub fn normalizes_course(&self) -> bool {
        self.normalize_course
    }

    /// Range (NM), reciprocal bearing and magnetic course from `origin` to `target`
    pub fn range_bearing_course(
        &self,
        origin: &Position,
        target: &TargetPosition,
        variation: f64,
    ) -> NavigationResult {
        let lat_01 = origin.latitude.degrees_to_radians();
        let long_01 = origin.longitude.degrees_to_radians();
        let lat_02 = target.latitude.degrees_to_radians();
        let long_02 = target.longitude.degrees_to_radians();
        let dif_long = long_02 - long_01;

        let factor =
            radius_correction_factor(lat_01, self.semi_major_axis_m, self.semi_minor_axis_m);

        // sin^2 + cos^2 rarely rounds to exactly 1, so coincident points are handled first
        let central_angle = if lat_01 == lat_02 && dif_long == 0.0 {
            0.0
        } else {
            (lat_01.sin() * lat_02.sin() + lat_01.cos() * lat_02.cos() * dif_long.cos())
                .clamp(-1.0, 1.0)
                .acos()
        };
        let range_nm = (central_angle * factor).meters_to_nautical_miles();

        let y = dif_long.sin() * lat_02.cos();
        let x = lat_01.cos() * lat_02.sin() - lat_01.sin() * lat_02.cos() * dif_long.cos();
        let true_bearing_deg = normalize_degrees(y.atan2(x).radians_to_degrees());

        let mut course_deg = true_bearing_deg + variation;
        if self.normalize_course {
            course_deg = normalize_degrees(course_deg);
        }

        let bearing_deg = to_course(course_deg);
        if bearing_deg.is_none() {
            warn!(course_deg, variation, "course outside display bands; no reciprocal bearing");
        }

        NavigationResult {
            range_nm,
            true_bearing_deg,
            bearing_deg,
            course_deg,
        }
    }
}

impl Default for GeodeticNavigator {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Ellipsoid radius correction (meters per radian of arc) at `lat_rad`
pub fn radius_correction_factor(
    lat_rad: f64,
    semi_major_axis_m: f64,
    semi_minor_axis_m: f64,
) -> f64 {
    let a1 = 1.0 / (semi_major_axis_m * semi_major_axis_m);
    let b1 = (lat_rad.tan() * lat_rad.tan()) / (semi_minor_axis_m * semi_minor_axis_m);
    let c1 = 1.0 / (a1 + b1).sqrt();
    c1 / lat_rad.cos()
}

/// `(degrees + 360) % 360`; exact for inputs in (-360, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees + 360.0) % 360.0
}

/// Reciprocal display bearing for a course.
///
/// Courses in [180, 360) map down by 180, courses in [0, 180) map up by 180.
/// Anything else (negative, 360 or more, NaN) has no display bearing.
pub fn to_course(course_deg: f64) -> Option<f64> {
    if (180.0..360.0).contains(&course_deg) {
        Some(course_deg - 180.0)
    } else if (0.0..180.0).contains(&course_deg) {
        Some(course_deg + 180.0)
    } else {
        None
    }
}

/// [`to_course`] with the legacy `999999.9` marker in place of `None`
pub fn to_course_or_sentinel(course_deg: f64) -> f64 {
    to_course(course_deg).unwrap_or(SENTINEL_BEARING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_course_bands() {
        assert_eq!(to_course(270.0), Some(90.0));
        assert_eq!(to_course(10.0), Some(190.0));
        assert_eq!(to_course(180.0), Some(0.0));
        assert_eq!(to_course(0.0), Some(180.0));
        assert_eq!(to_course(359.5), Some(179.5));
    }

    #[test]
    fn test_to_course_outside_bands() {
        assert_eq!(to_course(360.0), None);
        assert_eq!(to_course(412.0), None);
        assert_eq!(to_course(-0.5), None);
        assert_eq!(to_course(f64::NAN), None);
        assert_eq!(to_course_or_sentinel(360.0), 999_999.9);
        assert_eq!(to_course_or_sentinel(270.0), 90.0);
    }

    #[test]
    fn test_radius_factor_equator_and_mid_latitude() {
        let equator =
            radius_correction_factor(0.0, WGS84_SEMI_MAJOR_AXIS_M, WGS84_SEMI_MINOR_AXIS_M);
        assert!((equator - WGS84_SEMI_MAJOR_AXIS_M).abs() < 1e-6);

        let mid = radius_correction_factor(
            45.0_f64.degrees_to_radians(),
            WGS84_SEMI_MAJOR_AXIS_M,
            WGS84_SEMI_MINOR_AXIS_M,
        );
        assert!(mid < WGS84_SEMI_MAJOR_AXIS_M && mid > WGS84_SEMI_MINOR_AXIS_M);
    }

    #[test]
    fn test_one_degree_east_on_equator() {
        let navigator = GeodeticNavigator::wgs84();
        let origin = Position::at(0.0, 0.0);
        let result = navigator.range_bearing_course(&origin, &TargetPosition::new(0.0, 1.0), 0.0);

        assert!((result.range_nm - 60.04).abs() < 60.04 * 0.005, "range {}", result.range_nm);
        assert!((result.true_bearing_deg - 90.0).abs() < 1e-9);
        assert!((result.course_deg - 90.0).abs() < 1e-9);
        let bearing = result.bearing_deg.expect("course in band");
        assert!((bearing - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_cardinal_directions() {
        let navigator = GeodeticNavigator::wgs84();
        let origin = Position::at(10.0, 20.0);

        let north = navigator.range_bearing_course(&origin, &TargetPosition::new(11.0, 20.0), 0.0);
        assert!(north.true_bearing_deg.abs() < 1e-9);

        let south = navigator.range_bearing_course(&origin, &TargetPosition::new(9.0, 20.0), 0.0);
        assert!((south.true_bearing_deg - 180.0).abs() < 1e-9);
        assert_eq!(south.bearing_deg.map(|b| b.round()), Some(0.0));

        let west = navigator.range_bearing_course(&origin, &TargetPosition::new(10.0, 19.0), 0.0);
        assert!((west.true_bearing_deg - 270.0).abs() < 0.2);
    }

    #[test]
    fn test_zero_distance() {
        let navigator = GeodeticNavigator::wgs84();
        for (lat, lon) in [(0.0, 0.0), (37.7749, -122.4194), (-33.9, 151.2), (64.1, -21.9)] {
            let origin = Position::at(lat, lon);
            let target = TargetPosition::new(lat, lon);
            let result = navigator.range_bearing_course(&origin, &target, 0.0);
            assert_eq!(result.range_nm, 0.0, "at ({}, {})", lat, lon);
        }
    }

    #[test]
    fn test_variation_biases_course_without_renormalizing() {
        let navigator = GeodeticNavigator::wgs84();
        let origin = Position::at(0.0, 0.0);
        let target = TargetPosition::new(1.0, 0.0); // due north

        let east_var = navigator.range_bearing_course(&origin, &target, 15.0);
        assert!((east_var.course_deg - 15.0).abs() < 1e-9);
        assert!((east_var.bearing_deg.unwrap() - 195.0).abs() < 1e-9);

        // 0 + (-5) stays negative and has no display bearing
        let west_var = navigator.range_bearing_course(&origin, &target, -5.0);
        assert!((west_var.course_deg + 5.0).abs() < 1e-9);
        assert_eq!(west_var.bearing_deg, None);
    }

    #[test]
    fn test_positive_variation_pushes_course_past_360() {
        let navigator = GeodeticNavigator::wgs84();
        let origin = Position::at(0.0, 0.0);
        let target = TargetPosition::new(1.0, -0.01); // just west of north

        let result = navigator.range_bearing_course(&origin, &target, 5.0);
        assert!(result.true_bearing_deg > 359.0 && result.true_bearing_deg < 360.0);
        assert!(result.course_deg >= 360.0, "course {}", result.course_deg);
        assert!((result.course_deg - (result.true_bearing_deg + 5.0)).abs() < 1e-9);
        assert_eq!(result.bearing_deg, None);
        assert!(matches!(result.bearing(), Err(crate::validation::NavError::InvalidCourse { .. })));

        let normalized = navigator
            .with_course_normalization(true)
            .range_bearing_course(&origin, &target, 5.0);
        assert!(normalized.course_deg > 4.0 && normalized.course_deg < 5.0);
        assert!(normalized.bearing_deg.is_some());
    }

    #[test]
    fn test_course_normalization_opt_in() {
        let navigator = GeodeticNavigator::wgs84().with_course_normalization(true);
        assert!(navigator.normalizes_course());
        let origin = Position::at(0.0, 0.0);
        let result = navigator.range_bearing_course(&origin, &TargetPosition::new(1.0, 0.0), -5.0);
        assert!((result.course_deg - 355.0).abs() < 1e-9);
        assert!((result.bearing_deg.unwrap() - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_ellipsoid_shortens_range_at_latitude() {
        let navigator = GeodeticNavigator::wgs84();
        let equator = navigator.range_bearing_course(
            &Position::at(0.0, 0.0),
            &TargetPosition::new(1.0, 0.0),
            0.0,
        );
        let high = navigator.range_bearing_course(
            &Position::at(60.0, 0.0),
            &TargetPosition::new(61.0, 0.0),
            0.0,
        );
        assert!(high.range_nm < equator.range_nm);
    }
}
