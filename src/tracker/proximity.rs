//! The tracker: glues positioning input, the monitor and notification
//! dispatch together.

use crate::core::{MonitorState, State, StateHistory};
use crate::geo::{distance, Region, Sample};
use crate::monitor::{ProximityEvent, RegionMonitor};
use crate::tracker::builder::TrackerBuilder;
use crate::tracker::error::TrackerError;
use crate::tracker::feed::{ProximityFeed, Reading};
use crate::tracker::notify::{MessageTemplate, Notifier};
use crate::tracker::positioning::{AuthorizationStatus, PositioningEvent, PositioningFailure};
use crate::validation::RegionRules;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Proximity tracker for a single region.
///
/// Lifecycle: `configure(region)`, then authorization is granted (which
/// starts tracking), then fixes flow through [`on_sample`]. Samples are
/// processed in arrival order, whatever their timestamps; the tracker is the single writer
/// of the [`ProximityFeed`] observers read from.
///
/// [`on_sample`]: ProximityTracker::on_sample
///
/// # Example
///
/// ```rust
/// use tfence::geo::{Coordinate, Region, Sample};
/// use tfence::tracker::{LogNotifier, ProximityTracker};
///
/// let target = Coordinate::new(37.4979, 127.0276);
/// let mut tracker = ProximityTracker::new(LogNotifier);
/// tracker.configure(Region::new(target, 500.0)).unwrap();
/// tracker.on_authorization_granted().unwrap();
///
/// let event = tracker.on_sample(Sample::now(target)).unwrap();
/// assert!(event.is_some());
/// assert_eq!(tracker.feed().current_distance_meters(), Some(0.0));
/// ```
pub struct ProximityTracker {
    region: Option<Region>,
    rules: RegionRules,
    monitor: RegionMonitor,
    notifier: Box<dyn Notifier>,
    message: MessageTemplate,
    authorization: AuthorizationStatus,
    running: bool,
    last_fix_at: Option<DateTime<Utc>>,
    feed: ProximityFeed,
}

impl ProximityTracker {
    /// Unconfigured tracker with the default rules and message.
    pub fn new<N: Notifier + 'static>(notifier: N) -> Self {
        Self::from_parts(
            Box::new(notifier),
            RegionRules::new(),
            RegionMonitor::new(),
            MessageTemplate::default(),
        )
    }

    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    pub(crate) fn from_parts(
        notifier: Box<dyn Notifier>,
        rules: RegionRules,
        monitor: RegionMonitor,
        message: MessageTemplate,
    ) -> Self {
        Self {
            region: None,
            rules,
            monitor,
            notifier,
            message,
            authorization: AuthorizationStatus::NotDetermined,
            running: false,
            last_fix_at: None,
            feed: ProximityFeed::new(),
        }
    }

    /// Set the monitored region. Every rule violation is reported at once.
    ///
    /// A rejected region also drops any region set earlier, so the tracker
    /// is left unconfigured and [`start`](Self::start) fails until a valid
    /// region is supplied.
    ///
    /// A successful call starts a fresh session: the monitor returns to
    /// `Outside` and published readings are cleared. If authorization was
    /// already granted, tracking starts right away.
    pub fn configure(&mut self, region: Region) -> Result<(), TrackerError> {
        if self.running {
            return Err(TrackerError::AlreadyRunning);
        }
        if let Err(violations) = self.rules.check(&region) {
            warn!(?violations, "rejected region configuration");
            self.region = None;
            return Err(TrackerError::InvalidConfiguration { violations });
        }

        self.monitor.reset();
        self.feed.reset();
        self.last_fix_at = None;
        self.region = Some(region);
        info!(
            center = %region.center(),
            radius_m = region.radius_meters(),
            "region configured"
        );

        if self.authorization.is_granted() {
            self.start()?;
        }
        Ok(())
    }

    /// Begin consuming fixes. Requires a configured region and granted
    /// authorization; a no-op if already running.
    pub fn start(&mut self) -> Result<(), TrackerError> {
        if self.running {
            return Ok(());
        }
        if self.region.is_none() {
            return Err(TrackerError::NotConfigured);
        }
        if !self.authorization.is_granted() {
            return Err(TrackerError::AuthorizationDenied {
                status: self.authorization,
            });
        }

        self.running = true;
        self.feed.set_running(true);
        info!(authorization = %self.authorization, "tracking started");
        Ok(())
    }

    /// Stop consuming fixes. Monitor state is kept as is.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.feed.set_running(false);
        let state = self.monitor.state();
        info!(state = state.name(), "tracking stopped");
    }

    /// Record a new authorization status from the positioning subsystem.
    ///
    /// A granted status starts tracking, or is remembered until
    /// [`configure`](Self::configure) supplies a region. A refused status
    /// stops tracking and is returned as [`TrackerError::AuthorizationDenied`]
    /// so the host can tell the user.
    pub fn on_authorization_changed(
        &mut self,
        status: AuthorizationStatus,
    ) -> Result<(), TrackerError> {
        self.authorization = status;
        debug!(%status, "authorization changed");

        if status.is_granted() {
            self.start()
        } else if status.is_refused() {
            self.stop();
            warn!(%status, "location access refused");
            Err(TrackerError::AuthorizationDenied { status })
        } else {
            Ok(())
        }
    }

    pub fn on_authorization_granted(&mut self) -> Result<(), TrackerError> {
        self.on_authorization_changed(AuthorizationStatus::AuthorizedAlways)
    }

    /// Process one fix.
    ///
    /// Every valid fix is measured and published, whatever its timestamp,
    /// including while already inside. Returns the entry event when this
    /// fix crossed into the region; the notifier has been called by then.
    ///
    /// Fixes arriving while stopped are ignored.
    pub fn on_sample(&mut self, sample: Sample) -> Result<Option<ProximityEvent>, TrackerError> {
        if !self.running {
            debug!(timestamp = %sample.timestamp, "ignoring fix while stopped");
            return Ok(None);
        }
        let Some(region) = self.region else {
            return Ok(None);
        };
        if !sample.coordinate.is_valid() {
            warn!(coordinate = ?sample.coordinate, "discarding invalid fix");
            return Err(TrackerError::InvalidSample {
                coordinate: sample.coordinate,
            });
        }
        match self.last_fix_at {
            Some(latest) if sample.timestamp < latest => {
                debug!(
                    timestamp = %sample.timestamp,
                    latest = %latest,
                    "fix is older than the latest seen"
                );
            }
            _ => self.last_fix_at = Some(sample.timestamp),
        }

        let distance_meters = distance(sample.coordinate, region.center());
        let event = self
            .monitor
            .process_at_distance(&sample, &region, distance_meters);

        let state = self.monitor.state();
        self.feed.publish(
            Reading {
                distance_meters,
                user_coordinate: sample.coordinate,
                timestamp: sample.timestamp,
            },
            state,
        );
        debug!(
            distance_m = distance_meters,
            state = state.name(),
            "fix processed"
        );

        if let Some(event) = &event {
            self.dispatch(event);
        }
        Ok(event)
    }

    /// Log a delivery failure. State and published readings are untouched;
    /// the next fix is processed normally.
    pub fn on_failure(&self, failure: &PositioningFailure) {
        let state = self.monitor.state();
        warn!(
            error = %failure,
            state = state.name(),
            "positioning failure"
        );
    }

    /// Route one item of the positioning stream.
    pub fn handle(
        &mut self,
        event: PositioningEvent,
    ) -> Result<Option<ProximityEvent>, TrackerError> {
        match event {
            PositioningEvent::Fix(sample) => self.on_sample(sample),
            PositioningEvent::Failure(failure) => {
                self.on_failure(&failure);
                Ok(None)
            }
            PositioningEvent::Authorization(status) => {
                self.on_authorization_changed(status).map(|_| None)
            }
        }
    }

    /// Consume an ordered stream, returning the entry events it produced.
    /// Errors for individual items are logged and skipped.
    pub fn drain<I>(&mut self, events: I) -> Vec<ProximityEvent>
    where
        I: IntoIterator<Item = PositioningEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| match self.handle(event) {
                Ok(fired) => fired,
                Err(error) => {
                    debug!(%error, "skipping positioning event");
                    None
                }
            })
            .collect()
    }

    fn dispatch(&self, event: &ProximityEvent) {
        let intent = self.message.render(&event.region);
        info!(
            id = %intent.id,
            distance_m = event.distance_meters,
            at = %event.sample.timestamp,
            "entered region, dispatching notification"
        );
        self.notifier.deliver(intent);
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_authorized(&self) -> bool {
        self.authorization.is_granted()
    }

    pub fn authorization(&self) -> AuthorizationStatus {
        self.authorization
    }

    pub fn monitor_state(&self) -> MonitorState {
        self.monitor.state()
    }

    pub fn history(&self) -> &StateHistory<MonitorState> {
        self.monitor.history()
    }

    /// Handle for observers; clones share the same published state.
    pub fn feed(&self) -> ProximityFeed {
        self.feed.clone()
    }
}
