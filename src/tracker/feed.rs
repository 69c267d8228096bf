//! Published readings for observers such as a map or a distance label.
//!
//! The tracker is the only writer. Any number of cloned [`ProximityFeed`]
//! handles may read from other threads; each write replaces the whole
//! snapshot under a short lock and readers copy it out.

use crate::core::MonitorState;
use crate::geo::Coordinate;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Latest fix as seen by observers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reading {
    pub distance_meters: f64,
    pub user_coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// Distance in kilometres with two decimals, e.g. `"1.25 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.2} km", self.distance_meters / 1000.0)
    }
}

/// Everything an observer can read at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub reading: Option<Reading>,
    pub monitor_state: MonitorState,
    pub running: bool,
}

/// Read handle onto the tracker's published state.
#[derive(Clone, Debug, Default)]
pub struct ProximityFeed {
    inner: Arc<RwLock<Snapshot>>,
}

impl ProximityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        *self.inner.read()
    }

    pub fn reading(&self) -> Option<Reading> {
        self.inner.read().reading
    }

    /// `None` until the first fix has been processed.
    pub fn current_distance_meters(&self) -> Option<f64> {
        self.reading().map(|r| r.distance_meters)
    }

    pub fn user_coordinate(&self) -> Option<Coordinate> {
        self.reading().map(|r| r.user_coordinate)
    }

    pub fn monitor_state(&self) -> MonitorState {
        self.inner.read().monitor_state
    }

    pub fn is_running(&self) -> bool {
        self.inner.read().running
    }

    pub(crate) fn publish(&self, reading: Reading, monitor_state: MonitorState) {
        let mut snapshot = self.inner.write();
        snapshot.reading = Some(reading);
        snapshot.monitor_state = monitor_state;
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.inner.write().running = running;
    }

    pub(crate) fn reset(&self) {
        *self.inner.write() = Snapshot::default();
    }
}
