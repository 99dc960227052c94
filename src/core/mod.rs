//! Core types, constants and unit conversions for the navigation core

pub mod types;
pub mod constants;
pub mod units;

pub use types::*;
pub use constants::*;
pub use units::UnitConversions;
