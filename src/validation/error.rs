use crate::utils::config::ConfigError;
use thiserror::Error;

/// Result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;

/// Errors surfaced by the navigation context and sample feeds
#[derive(Debug, Error)]
pub enum NavError {
    /// A range/bearing was requested before any position sample arrived
    #[error("no position fix received yet")]
    NoPositionFix,
    /// The course fell outside both reciprocal-bearing bands
    #[error("course {course_deg} deg is outside the displayable range [0, 360)")]
    InvalidCourse { course_deg: f64 },
    /// The sample feed has no more events and never will
    #[error("sensor feed closed")]
    FeedClosed,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
