//! Edge-triggered entry detection for a single region.
//!
//! The monitor is a two-state machine (`Outside`, `Inside`). It reports
//! an [`EventKind::Entered`] event on the first fix inside the radius and
//! stays silent afterwards, for as long as the session lasts: there is no
//! exit transition, so a subject loitering at the boundary is never
//! notified twice.

use crate::core::{Guard, MonitorState, State, StateHistory, StateTransition};
use crate::geo::{distance, Region, Sample};
use serde::{Deserialize, Serialize};

/// Measurement handed to the entry guard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proximity {
    pub distance_meters: f64,
    pub radius_meters: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Entered,
}

/// Transition event produced by the monitor. Handed straight to the
/// notification path and not retained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProximityEvent {
    pub kind: EventKind,
    pub region: Region,
    pub sample: Sample,
    pub distance_meters: f64,
}

/// Inclusive boundary: `distance <= radius` counts as inside.
pub fn within_radius() -> Guard<Proximity> {
    Guard::new(|p: &Proximity| p.distance_meters <= p.radius_meters)
}

/// State machine deciding when an "entered region" event fires.
///
/// # Example
///
/// ```rust
/// use tfence::geo::{Coordinate, Region, Sample};
/// use tfence::monitor::{EventKind, RegionMonitor};
///
/// let center = Coordinate::new(37.4979, 127.0276);
/// let region = Region::new(center, 500.0);
/// let mut monitor = RegionMonitor::new();
///
/// let event = monitor.process(&Sample::now(center), &region).unwrap();
/// assert_eq!(event.kind, EventKind::Entered);
///
/// // Still inside: no second event.
/// assert!(monitor.process(&Sample::now(center), &region).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RegionMonitor {
    state: MonitorState,
    entry_guard: Guard<Proximity>,
    history: StateHistory<MonitorState>,
}

impl Default for RegionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionMonitor {
    /// Monitor in the `Outside` state with the inclusive radius guard.
    pub fn new() -> Self {
        Self::with_entry_guard(within_radius())
    }

    /// Monitor using a custom entry predicate, e.g. a hysteresis margin.
    pub fn with_entry_guard(entry_guard: Guard<Proximity>) -> Self {
        Self {
            state: MonitorState::Outside,
            entry_guard,
            history: StateHistory::new(),
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<MonitorState> {
        &self.history
    }

    /// Feed one fix. Returns the entry event if this fix moved the monitor
    /// from `Outside` to `Inside`.
    pub fn process(&mut self, sample: &Sample, region: &Region) -> Option<ProximityEvent> {
        let distance_meters = distance(sample.coordinate, region.center());
        self.process_at_distance(sample, region, distance_meters)
    }

    /// Same as [`process`](Self::process) for callers that already measured
    /// the distance to the region center.
    pub fn process_at_distance(
        &mut self,
        sample: &Sample,
        region: &Region,
        distance_meters: f64,
    ) -> Option<ProximityEvent> {
        if self.state.is_final() {
            return None;
        }

        let proximity = Proximity {
            distance_meters,
            radius_meters: region.radius_meters(),
        };
        if !self.entry_guard.check(&proximity) {
            return None;
        }

        self.history = self.history.record(StateTransition {
            from: self.state,
            to: MonitorState::Inside,
            timestamp: sample.timestamp,
            distance_meters,
        });
        self.state = MonitorState::Inside;

        Some(ProximityEvent {
            kind: EventKind::Entered,
            region: *region,
            sample: *sample,
            distance_meters,
        })
    }

    /// Back to `Outside` with an empty history. Only used when the tracker
    /// is reconfigured for a new session.
    pub fn reset(&mut self) {
        self.state = MonitorState::Outside;
        self.history = StateHistory::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{destination, Coordinate};
    use chrono::{Duration, TimeZone, Utc};

    const CENTER: Coordinate = Coordinate::new(37.4979, 127.0276);

    fn region() -> Region {
        Region::new(CENTER, 500.0)
    }

    fn sample_at(meters: f64, second: i64) -> Sample {
        let base = Utc.with_ymd_and_hms(2025, 10, 19, 9, 0, 0).unwrap();
        Sample::new(
            destination(CENTER, 90.0, meters),
            base + Duration::seconds(second),
        )
    }

    #[test]
    fn center_fix_enters() {
        let mut monitor = RegionMonitor::new();
        let event = monitor.process(&Sample::now(CENTER), &region()).unwrap();

        assert_eq!(event.kind, EventKind::Entered);
        assert_eq!(event.distance_meters, 0.0);
        assert_eq!(monitor.state(), MonitorState::Inside);
    }

    #[test]
    fn far_fix_stays_outside() {
        let mut monitor = RegionMonitor::new();

        assert!(monitor.process(&sample_at(10_000.0, 0), &region()).is_none());
        assert_eq!(monitor.state(), MonitorState::Outside);
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut inside = RegionMonitor::new();
        assert!(inside.process(&sample_at(499.9, 0), &region()).is_some());

        let mut outside = RegionMonitor::new();
        assert!(outside.process(&sample_at(500.1, 0), &region()).is_none());

        let mut exact = RegionMonitor::new();
        let sample = sample_at(500.0, 0);
        assert!(exact
            .process_at_distance(&sample, &region(), 500.0)
            .is_some());
    }

    #[test]
    fn consecutive_inside_fixes_fire_once() {
        let mut monitor = RegionMonitor::new();

        let first = monitor.process(&sample_at(100.0, 0), &region());
        let second = monitor.process(&sample_at(50.0, 1), &region());

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(monitor.history().transitions().len(), 1);
    }

    #[test]
    fn leaving_does_not_rearm() {
        let mut monitor = RegionMonitor::new();

        assert!(monitor.process(&sample_at(100.0, 0), &region()).is_some());
        assert!(monitor.process(&sample_at(5_000.0, 1), &region()).is_none());
        assert!(monitor.process(&sample_at(100.0, 2), &region()).is_none());
        assert_eq!(monitor.state(), MonitorState::Inside);
    }

    #[test]
    fn history_records_fix_timestamp() {
        let mut monitor = RegionMonitor::new();
        let sample = sample_at(200.0, 42);

        monitor.process(&sample, &region());

        let entry = monitor.history().last().unwrap();
        assert_eq!(entry.from, MonitorState::Outside);
        assert_eq!(entry.to, MonitorState::Inside);
        assert_eq!(entry.timestamp, sample.timestamp);
        assert!((entry.distance_meters - 200.0).abs() < 1e-6);
    }

    #[test]
    fn custom_guard_changes_boundary() {
        let strict = Guard::new(|p: &Proximity| p.distance_meters < p.radius_meters - 50.0);
        let mut monitor = RegionMonitor::with_entry_guard(strict);

        assert!(monitor.process(&sample_at(480.0, 0), &region()).is_none());
        assert!(monitor.process(&sample_at(420.0, 1), &region()).is_some());
    }

    #[test]
    fn reset_returns_to_outside() {
        let mut monitor = RegionMonitor::new();
        monitor.process(&sample_at(10.0, 0), &region());

        monitor.reset();

        assert_eq!(monitor.state(), MonitorState::Outside);
        assert!(monitor.history().transitions().is_empty());
        assert!(monitor.process(&sample_at(10.0, 1), &region()).is_some());
    }
}
