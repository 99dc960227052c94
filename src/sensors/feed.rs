//! Typed sensor sample stream
//!
//! Position and heading updates arrive independently. A [`SampleFeed`] hands
//! them to the navigation context one at a time, whatever the delivery
//! mechanism: a channel from a sensor thread, or a prepared script for replay
//! and tests.

use crate::validation::{NavError, NavResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Raw location fix from the sensor source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_meters: f64,
}

/// Raw compass reading from the sensor source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingUpdate {
    pub magnetic_heading_deg: f64,
    pub true_heading_deg: f64,
    /// Ground speed at the time of the reading (m/s)
    pub speed_mps: f64,
}

/// One sensor event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorEvent {
    Position(PositionUpdate),
    Heading(HeadingUpdate),
}

/// Source of sensor events
pub trait SampleFeed {
    /// Next event, waiting for one if the source can produce more.
    ///
    /// Returns [`NavError::FeedClosed`] once the source is exhausted.
    fn next_event(&mut self) -> NavResult<SensorEvent>;

    /// Next event if one is ready, without waiting
    fn try_next_event(&mut self) -> NavResult<Option<SensorEvent>>;
}

/// Feed backed by an `mpsc` channel, for sensors running on another thread
pub struct ChannelFeed {
    receiver: Receiver<SensorEvent>,
}

impl ChannelFeed {
    /// Create a feed and the sender the sensor side publishes into
    pub fn channel() -> (Sender<SensorEvent>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self { receiver })
    }

    pub fn from_receiver(receiver: Receiver<SensorEvent>) -> Self {
        Self { receiver }
    }
}

impl SampleFeed for ChannelFeed {
    fn next_event(&mut self) -> NavResult<SensorEvent> {
        self.receiver.recv().map_err(|_| NavError::FeedClosed)
    }

    fn try_next_event(&mut self) -> NavResult<Option<SensorEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(NavError::FeedClosed),
        }
    }
}

/// Pre-recorded feed for replay and testing
#[derive(Debug, Clone, Default)]
pub struct ScriptedFeed {
    events: VecDeque<SensorEvent>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of events
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let events: Vec<SensorEvent> = serde_json::from_str(json)?;
        Ok(events.into_iter().collect())
    }

    pub fn push_position(&mut self, latitude: f64, longitude: f64, altitude_meters: f64) {
        self.events.push_back(SensorEvent::Position(PositionUpdate {
            latitude,
            longitude,
            altitude_meters,
        }));
    }

    pub fn push_heading(
        &mut self,
        true_heading_deg: f64,
        magnetic_heading_deg: f64,
        speed_mps: f64,
    ) {
        self.events.push_back(SensorEvent::Heading(HeadingUpdate {
            magnetic_heading_deg,
            true_heading_deg,
            speed_mps,
        }));
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl FromIterator<SensorEvent> for ScriptedFeed {
    fn from_iter<I: IntoIterator<Item = SensorEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl SampleFeed for ScriptedFeed {
    fn next_event(&mut self) -> NavResult<SensorEvent> {
        self.events.pop_front().ok_or(NavError::FeedClosed)
    }

    fn try_next_event(&mut self) -> NavResult<Option<SensorEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => Err(NavError::FeedClosed),
        }
    }
}
