//! Navigation algorithms

pub mod magnetic_variation;
pub mod geodetic;

pub use magnetic_variation::{compute_variation, MagneticVariationEstimator, WraparoundCase};
pub use geodetic::{
    normalize_degrees, radius_correction_factor, to_course, to_course_or_sentinel,
    GeodeticNavigator,
};
