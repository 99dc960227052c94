//! Navigation context: latest fix, headings and magnetic variation
//!
//! One `NavigationTracker` is owned by whatever thread delivers sensor events.
//! It applies each event as it arrives and answers range/bearing/course
//! queries against the most recent state. When another thread needs the
//! variation, attach a [`SharedVariation`] and every heading update is
//! published to it.

use crate::algorithms::{GeodeticNavigator, MagneticVariationEstimator, WraparoundCase};
use crate::sensors::feed::{HeadingUpdate, PositionUpdate, SampleFeed, SensorEvent};
use crate::core::{
    DisplaySnapshot, HeadingSample, NavigationResult, Position, TargetPosition, UnitConversions,
    VariationEstimate,
};
use crate::processing::shared::SharedVariation;
use crate::utils::config::NavigatorConfig;
use crate::validation::{NavError, NavResult};
use tracing::{debug, trace};

/// What applying a sensor event changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// Latitude, longitude and altitude replaced
    PositionUpdated,
    /// Headings, speed and variation replaced
    HeadingUpdated { variation: f64, case: WraparoundCase },
    /// Heading dropped because no position fix exists yet
    AwaitingFix,
}

#[derive(Debug, Clone)]
pub struct NavigationTracker {
    estimator: MagneticVariationEstimator,
    navigator: GeodeticNavigator,
    position: Option<Position>,
    heading: Option<HeadingSample>,
    variation: VariationEstimate,
    shared_variation: Option<SharedVariation>,
}

impl NavigationTracker {
    pub fn new(config: &NavigatorConfig) -> Self {
        Self::with_components(config.estimator(), config.navigator())
    }

    pub fn with_components(
        estimator: MagneticVariationEstimator,
        navigator: GeodeticNavigator,
    ) -> Self {
        Self {
            estimator,
            navigator,
            position: None,
            heading: None,
            variation: VariationEstimate::default(),
            shared_variation: None,
        }
    }

    /// Publish every new variation to `shared` as well
    pub fn with_shared_variation(mut self, shared: SharedVariation) -> Self {
        shared.store(self.variation);
        self.shared_variation = Some(shared);
        self
    }

    pub fn apply(&mut self, event: SensorEvent) -> UpdateOutcome {
        match event {
            SensorEvent::Position(update) => self.apply_position(update),
            SensorEvent::Heading(update) => self.apply_heading(update),
        }
    }

    pub fn apply_position(&mut self, update: PositionUpdate) -> UpdateOutcome {
        let speed_knots = self.position.map(|p| p.speed_knots).unwrap_or(0.0);
        let position = Position {
            latitude: update.latitude,
            longitude: update.longitude,
            altitude_feet: update.altitude_meters.meters_to_feet(),
            speed_knots,
        };
        debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            altitude_feet = position.altitude_feet,
            "position update"
        );
        self.position = Some(position);
        UpdateOutcome::PositionUpdated
    }

    pub fn apply_heading(&mut self, update: HeadingUpdate) -> UpdateOutcome {
        let Some(position) = self.position.as_mut() else {
            trace!("heading update before first fix; ignored");
            return UpdateOutcome::AwaitingFix;
        };
        position.speed_knots = update.speed_mps.meters_per_second_to_knots();

        let sample = HeadingSample::new(update.true_heading_deg, update.magnetic_heading_deg);
        let (variation, case) = self
            .estimator
            .compute_with_case(sample.true_heading, sample.mag_heading);

        self.heading = Some(sample);
        self.variation = VariationEstimate::new(variation);
        if let Some(shared) = &self.shared_variation {
            shared.store(self.variation);
        }

        debug!(
            true_heading = sample.true_heading,
            mag_heading = sample.mag_heading,
            variation,
            ?case,
            "heading update"
        );
        UpdateOutcome::HeadingUpdated { variation, case }
    }

    /// Apply events until the feed closes, returning how many were consumed
    pub fn run<F: SampleFeed + ?Sized>(&mut self, feed: &mut F) -> NavResult<usize> {
        let mut applied = 0;
        loop {
            match feed.next_event() {
                Ok(event) => {
                    self.apply(event);
                    applied += 1;
                }
                Err(NavError::FeedClosed) => return Ok(applied),
                Err(e) => return Err(e),
            }
        }
    }

    /// Apply only the events already waiting in the feed; stops quietly if it closes
    pub fn drain_ready<F: SampleFeed + ?Sized>(&mut self, feed: &mut F) -> NavResult<usize> {
        let mut applied = 0;
        loop {
            match feed.try_next_event() {
                Ok(Some(event)) => {
                    self.apply(event);
                    applied += 1;
                }
                Ok(None) | Err(NavError::FeedClosed) => return Ok(applied),
                Err(e) => return Err(e),
            }
        }
    }

    /// Range, bearing and course from the latest fix, biased by the latest variation
    pub fn range_bearing_course_to(&self, target: &TargetPosition) -> NavResult<NavigationResult> {
        let origin = self.position.as_ref().ok_or(NavError::NoPositionFix)?;
        Ok(self
            .navigator
            .range_bearing_course(origin, target, self.variation.value))
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn heading(&self) -> Option<&HeadingSample> {
        self.heading.as_ref()
    }

    pub fn variation(&self) -> VariationEstimate {
        self.variation
    }

    /// Values for the heading/variation readout; zeros until the first heading
    pub fn snapshot(&self) -> DisplaySnapshot {
        let heading = self.heading.unwrap_or(HeadingSample::new(0.0, 0.0));
        DisplaySnapshot {
            mag_heading: heading.mag_heading,
            true_heading: heading.true_heading,
            magnetic_variation: self.variation.value,
        }
    }
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new(&NavigatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::feed::ScriptedFeed;

    fn heading(true_heading_deg: f64, magnetic_heading_deg: f64) -> HeadingUpdate {
        HeadingUpdate {
            magnetic_heading_deg,
            true_heading_deg,
            speed_mps: 0.0,
        }
    }

    fn position(latitude: f64, longitude: f64) -> PositionUpdate {
        PositionUpdate {
            latitude,
            longitude,
            altitude_meters: 0.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let tracker = NavigationTracker::default();
        assert!(tracker.position().is_none());
        assert!(tracker.heading().is_none());
        assert_eq!(tracker.variation().value, 0.0);
        assert_eq!(tracker.snapshot(), DisplaySnapshot::default());
        assert!(matches!(
            tracker.range_bearing_course_to(&TargetPosition::new(1.0, 1.0)),
            Err(NavError::NoPositionFix)
        ));
    }

    #[test]
    fn test_heading_before_fix_is_ignored() {
        let mut tracker = NavigationTracker::default();
        assert_eq!(tracker.apply_heading(heading(350.0, 5.0)), UpdateOutcome::AwaitingFix);
        assert!(tracker.heading().is_none());
        assert_eq!(tracker.variation().value, 0.0);
    }

    #[test]
    fn test_position_units() {
        let mut tracker = NavigationTracker::default();
        tracker.apply_position(PositionUpdate {
            latitude: 37.0,
            longitude: -122.0,
            altitude_meters: 1000.0,
        });
        tracker.apply_heading(HeadingUpdate {
            magnetic_heading_deg: 100.0,
            true_heading_deg: 87.0,
            speed_mps: 100.0,
        });

        let fix = tracker.position().unwrap();
        assert!((fix.altitude_feet - 3280.8399).abs() < 1e-9);
        assert!((fix.speed_knots - 194.4).abs() < 1e-9);

        // A later position keeps the last known speed
        tracker.apply_position(position(37.1, -122.0));
        assert!((tracker.position().unwrap().speed_knots - 194.4).abs() < 1e-9);
    }

    #[test]
    fn test_variation_overwritten_each_heading() {
        let mut tracker = NavigationTracker::default();
        tracker.apply_position(position(0.0, 0.0));

        assert_eq!(
            tracker.apply_heading(heading(350.0, 5.0)),
            UpdateOutcome::HeadingUpdated {
                variation: 15.0,
                case: WraparoundCase::Eastern
            }
        );
        assert_eq!(tracker.variation().value, 15.0);

        tracker.apply_heading(heading(10.0, 5.0));
        assert_eq!(tracker.variation().value, -5.0);
        assert_eq!(
            tracker.snapshot(),
            DisplaySnapshot {
                mag_heading: 5.0,
                true_heading: 10.0,
                magnetic_variation: -5.0,
            }
        );
    }

    #[test]
    fn test_variation_biases_course() {
        let mut tracker = NavigationTracker::default();
        tracker.apply_position(position(0.0, 0.0));
        tracker.apply_heading(heading(90.0, 100.0));

        let result = tracker
            .range_bearing_course_to(&TargetPosition::new(0.0, 1.0))
            .unwrap();
        assert!((result.true_bearing_deg - 90.0).abs() < 1e-9);
        assert!((result.course_deg - 100.0).abs() < 1e-9);
        assert!((result.bearing().unwrap() - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_consumes_feed() {
        let mut feed = ScriptedFeed::new();
        feed.push_heading(1.0, 2.0, 0.0);
        feed.push_position(10.0, 10.0, 0.0);
        feed.push_heading(20.0, 12.0, 5.0);

        let mut tracker = NavigationTracker::default();
        assert_eq!(tracker.run(&mut feed).unwrap(), 3);
        assert_eq!(feed.remaining(), 0);
        assert_eq!(tracker.variation().value, -8.0);
    }

    #[test]
    fn test_drain_ready_stops_when_channel_empty() {
        let (sender, mut feed) = crate::sensors::feed::ChannelFeed::channel();
        sender.send(SensorEvent::Position(position(5.0, 5.0))).unwrap();
        sender.send(SensorEvent::Heading(heading(40.0, 30.0))).unwrap();

        let mut tracker = NavigationTracker::default();
        assert_eq!(tracker.drain_ready(&mut feed).unwrap(), 2);
        assert_eq!(tracker.drain_ready(&mut feed).unwrap(), 0);
        assert_eq!(tracker.variation().value, -10.0);

        drop(sender);
        assert_eq!(tracker.drain_ready(&mut feed).unwrap(), 0);
    }

    #[test]
    fn test_shared_variation_published() {
        let shared = SharedVariation::with_value(99.0);
        let mut tracker = NavigationTracker::default().with_shared_variation(shared.clone());
        assert_eq!(shared.load().value, 0.0);

        tracker.apply_position(position(0.0, 0.0));
        tracker.apply_heading(heading(3.0, 355.0));
        assert_eq!(shared.load().value, -8.0);
    }

    #[test]
    fn test_configured_threshold_and_normalization() {
        let config = NavigatorConfig {
            wraparound_threshold_deg: 120.0,
            normalize_course: true,
            ..NavigatorConfig::default()
        };
        let mut tracker = NavigationTracker::new(&config);
        tracker.apply_position(position(0.0, 0.0));

        // 100 deg apparent difference is below the raised threshold
        tracker.apply_heading(heading(0.0, 100.0));
        assert_eq!(tracker.variation().value, 100.0);

        let result = tracker
            .range_bearing_course_to(&TargetPosition::new(0.0, 1.0))
            .unwrap();
        assert!((result.course_deg - 190.0).abs() < 1e-9);

        tracker.apply_heading(heading(100.0, 0.0));
        let result = tracker
            .range_bearing_course_to(&TargetPosition::new(1.0, 0.0))
            .unwrap();
        assert!((result.course_deg - 260.0).abs() < 1e-9);
        assert!(result.bearing_deg.is_some());
    }
}
