//! Magnetic variation and range/bearing/course core
//!
//! Derives the local magnetic variation from paired true/magnetic heading
//! readings, and range, bearing and magnetic course from the current position
//! to any target using a WGS84-corrected earth radius.

pub mod core;
pub mod algorithms;
pub mod sensors;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    DisplaySnapshot, HeadingSample, NavigationResult, Position, TargetPosition, UnitConversions,
    VariationEstimate, SENTINEL_BEARING,
};
pub use crate::algorithms::{
    compute_variation, to_course, to_course_or_sentinel, GeodeticNavigator,
    MagneticVariationEstimator, WraparoundCase,
};
pub use crate::sensors::{
    ChannelFeed, HeadingUpdate, PositionUpdate, SampleFeed, ScriptedFeed, SensorEvent,
};
pub use crate::processing::{NavigationTracker, SharedVariation, UpdateOutcome};
pub use crate::validation::{NavError, NavResult};
pub use crate::utils::{ConfigError, ConfigurationManager, NavigatorConfig};
pub use crate::api::{NavigationReport, TextFormatter};
