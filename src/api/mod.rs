//! Output side: display readout and text/JSON formatting of navigation results

pub mod formatting;

pub use formatting::{
    format_coordinate, format_decimal, to_json, CoordinateKind, NavigationReport, TextFormatter,
};
