//! Sample processing and navigation state

pub mod tracker;
pub mod shared;

pub use tracker::{NavigationTracker, UpdateOutcome};
pub use shared::SharedVariation;
