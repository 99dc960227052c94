//! Display readout and text/JSON formatting of navigation output

use crate::core::constants::SENTINEL_BEARING;
use crate::core::{DisplaySnapshot, NavigationResult, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mag Heading: {}", self.mag_heading)?;
        writeln!(f, "True Heading: {}", self.true_heading)?;
        write!(f, "Mag Var: {}", self.magnetic_variation)
    }
}

/// Which hemisphere letters apply to a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

/// `value` with exactly `places` decimals
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Unsigned coordinate with a hemisphere suffix, e.g. `37.77°N` or `122.42°W`.
///
/// The hemisphere comes from the sign of the unrounded value, so `-0.001` at
/// two places reads `0.00°S`.
pub fn format_coordinate(value: f64, places: usize, kind: CoordinateKind) -> String {
    let digits = format_decimal(value, places).replace('-', "");
    let hemisphere = match (kind, value < 0.0) {
        (CoordinateKind::Latitude, false) => "°N",
        (CoordinateKind::Latitude, true) => "°S",
        (CoordinateKind::Longitude, false) => "°E",
        (CoordinateKind::Longitude, true) => "°W",
    };
    digits + hemisphere
}

/// Everything the CLI reports after a replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationReport {
    pub display: DisplaySnapshot,
    pub position: Option<Position>,
    pub navigation: Option<NavigationResult>,
}

/// Human-readable formatter
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Decimal places for angles and distances
    pub decimals: usize,
    /// Single-line output
    pub compact: bool,
}

impl TextFormatter {
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            compact: false,
        }
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Bearing text; the legacy sentinel is shown when there is no display bearing
    fn bearing_text(&self, result: &NavigationResult) -> String {
        match result.bearing_deg {
            Some(bearing) => format_decimal(bearing, self.decimals),
            None => format!("{} (invalid)", SENTINEL_BEARING),
        }
    }

    pub fn format_navigation(&self, result: &NavigationResult) -> String {
        let range = format_decimal(result.range_nm, self.decimals);
        let bearing = self.bearing_text(result);
        let course = format_decimal(result.course_deg, self.decimals);

        if self.compact {
            format!("RNG {} NM | BRG {} | CRS {}", range, bearing, course)
        } else {
            let mut output = String::new();
            output.push_str(&format!("Range:   {} NM\n", range));
            output.push_str(&format!("Bearing: {}\n", bearing));
            output.push_str(&format!("Course:  {}\n", course));
            output.push_str(&format!(
                "True bearing: {}",
                format_decimal(result.true_bearing_deg, self.decimals)
            ));
            output
        }
    }

    pub fn format_position(&self, position: &Position) -> String {
        let lat = format_coordinate(position.latitude, self.decimals, CoordinateKind::Latitude);
        let lon = format_coordinate(position.longitude, self.decimals, CoordinateKind::Longitude);
        let alt = format_decimal(position.altitude_feet, 0);
        let speed = format_decimal(position.speed_knots, 0);

        if self.compact {
            format!("{} {} {} ft {} kn", lat, lon, alt, speed)
        } else {
            format!("Position: {} {}\nAltitude: {} ft\nSpeed:    {} kn", lat, lon, alt, speed)
        }
    }

    pub fn format_report(&self, report: &NavigationReport) -> String {
        let mut sections = vec![report.display.to_string()];
        if let Some(position) = &report.position {
            sections.push(self.format_position(position));
        }
        if let Some(result) = &report.navigation {
            sections.push(self.format_navigation(result));
        }
        let separator = if self.compact { " | " } else { "\n" };
        sections.join(separator)
    }
}

/// Pretty JSON for a report
pub fn to_json(report: &NavigationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
