//! Tfence: proximity alerts for a single circular geofence.
//!
//! Given a target region and a stream of location fixes, Tfence measures
//! the great-circle distance from every fix to the target, detects the
//! moment the subject enters the region, and emits exactly one
//! notification for that entry.
//!
//! The crate keeps a pure core (state types, guards, history, distance
//! math, validation) apart from the shell that performs side effects
//! (logging, notification dispatch, publishing readings).
//!
//! # Core Concepts
//!
//! - **Region**: a center coordinate and a radius in meters
//! - **Monitor**: edge-triggered `Outside -> Inside` state machine
//! - **Tracker**: feeds fixes to the monitor, publishes the current
//!   distance and dispatches the entry alert
//!
//! # Example
//!
//! ```rust
//! use tfence::geo::{destination, Coordinate, Region, Sample};
//! use tfence::tracker::{LogNotifier, ProximityTracker};
//!
//! let target = Coordinate::new(37.4979, 127.0276);
//! let mut tracker = ProximityTracker::new(LogNotifier);
//! tracker.configure(Region::new(target, 500.0)).unwrap();
//! tracker.on_authorization_granted().unwrap();
//!
//! let now = chrono::Utc::now();
//! let far = Sample::new(destination(target, 0.0, 3_000.0), now);
//! let near = Sample::new(destination(target, 0.0, 300.0), now);
//!
//! assert!(tracker.on_sample(far).unwrap().is_none());
//! assert!(tracker.on_sample(near).unwrap().is_some());
//! ```

pub mod config;
pub mod core;
pub mod geo;
pub mod monitor;
pub mod tracker;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, ProximityConfig};
pub use core::{MonitorState, State};
pub use geo::{distance, Coordinate, Region, Sample};
pub use monitor::{EventKind, ProximityEvent, RegionMonitor};
pub use tracker::{
    AuthorizationStatus, Notifier, PositioningEvent, PositioningFailure, ProximityFeed,
    ProximityTracker, TrackerError,
};
