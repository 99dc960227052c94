//! Earth model and unit conversion constants

/// WGS84 semi-major axis (meters)
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 semi-minor axis (meters)
pub const WGS84_SEMI_MINOR_AXIS_M: f64 = 6_356_752.314_245;

/// Meters to feet
pub const METERS_TO_FEET: f64 = 3.2808399;

/// Meters to nautical miles.
///
/// This is 1 / 1853.184 (the Admiralty mile), not 1 / 1852. Range output depends
/// on it, so it must not be "corrected".
pub const METERS_TO_NAUTICAL_MILES: f64 = 0.0005396118248380001;

/// Meters per second to knots
pub const MPS_TO_KNOTS: f64 = 1.944;

/// Minutes per hour, for knots to NM/min
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Apparent heading difference beyond which a pair is treated as straddling 0°/360°
pub const DEFAULT_WRAPAROUND_THRESHOLD_DEG: f64 = 90.0;

/// Legacy numeric marker for a course outside both display bands
pub const SENTINEL_BEARING: f64 = 999_999.9;
