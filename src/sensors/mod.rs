//! Sensor event stream
//!
//! Position and heading deliveries become typed [`SensorEvent`]s behind the
//! [`SampleFeed`] trait, independent of how the platform delivers them.

pub mod feed;

pub use feed::{ChannelFeed, HeadingUpdate, PositionUpdate, SampleFeed, ScriptedFeed, SensorEvent};
