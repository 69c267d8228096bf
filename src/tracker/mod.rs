//! The imperative shell around the monitor.
//!
//! The tracker receives fixes from the positioning subsystem, measures
//! distance, drives the [`RegionMonitor`](crate::monitor::RegionMonitor),
//! publishes readings for observers and hands entry alerts to a
//! [`Notifier`]. It logs through `tracing` and never installs a
//! subscriber itself.
//!
//! # Key Concepts
//!
//! - **Tracker**: single writer; processes fixes strictly in arrival order
//! - **Feed**: cloneable read handle with the latest distance and position
//! - **Notifier**: the notification subsystem, injected so tests can
//!   substitute a recorder

mod builder;
mod error;
mod feed;
mod notify;
mod positioning;
mod proximity;

pub use builder::TrackerBuilder;
pub use error::{BuildError, TrackerError};
pub use feed::{ProximityFeed, Reading, Snapshot};
pub use notify::{
    LogNotifier, MessageTemplate, NotificationIntent, Notifier, DEFAULT_BODY, DEFAULT_TITLE,
    RADIUS_PLACEHOLDER,
};
pub use positioning::{AuthorizationStatus, PositioningEvent, PositioningFailure};
pub use proximity::ProximityTracker;
