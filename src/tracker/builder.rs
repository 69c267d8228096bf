//! Builder for constructing trackers.

use crate::config::ProximityConfig;
use crate::core::Guard;
use crate::geo::Region;
use crate::monitor::{Proximity, RegionMonitor};
use crate::tracker::error::BuildError;
use crate::tracker::notify::{MessageTemplate, Notifier};
use crate::tracker::proximity::ProximityTracker;
use crate::validation::RegionRules;

/// Builder for constructing a [`ProximityTracker`] with a fluent API.
///
/// ```rust
/// use tfence::geo::{Coordinate, Region};
/// use tfence::tracker::{LogNotifier, MessageTemplate, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new()
///     .notifier(LogNotifier)
///     .region(Region::new(Coordinate::new(37.4979, 127.0276), 500.0))
///     .message(MessageTemplate::new("Arrived", "Within {radius} m"))
///     .build()
///     .unwrap();
///
/// assert!(tracker.region().is_some());
/// ```
#[derive(Default)]
pub struct TrackerBuilder {
    notifier: Option<Box<dyn Notifier>>,
    region: Option<Region>,
    message: MessageTemplate,
    rules: Option<RegionRules>,
    entry_guard: Option<Guard<Proximity>>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with the region, message and limits of a loaded
    /// configuration. A notifier must still be supplied.
    pub fn from_config(config: &ProximityConfig) -> Self {
        Self::new()
            .region(config.region())
            .message(config.message())
            .rules(config.rules())
    }

    /// Set the notification collaborator (required).
    pub fn notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Configure this region as part of `build()` (optional).
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn message(mut self, message: MessageTemplate) -> Self {
        self.message = message;
        self
    }

    /// Replace the default region rules.
    pub fn rules(mut self, rules: RegionRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Replace the inclusive radius test used for entry.
    pub fn entry_guard(mut self, guard: Guard<Proximity>) -> Self {
        self.entry_guard = Some(guard);
        self
    }

    /// Build the tracker, configuring the region if one was given.
    pub fn build(self) -> Result<ProximityTracker, BuildError> {
        let notifier = self.notifier.ok_or(BuildError::MissingNotifier)?;
        let monitor = match self.entry_guard {
            Some(guard) => RegionMonitor::with_entry_guard(guard),
            None => RegionMonitor::new(),
        };

        let mut tracker = ProximityTracker::from_parts(
            notifier,
            self.rules.unwrap_or_default(),
            monitor,
            self.message,
        );
        if let Some(region) = self.region {
            tracker.configure(region)?;
        }
        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::tracker::error::TrackerError;
    use crate::tracker::notify::LogNotifier;

    #[test]
    fn builder_requires_notifier() {
        let result = TrackerBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingNotifier)));
    }

    #[test]
    fn builder_without_region_is_unconfigured() {
        let tracker = TrackerBuilder::new().notifier(LogNotifier).build().unwrap();

        assert!(tracker.region().is_none());
        assert!(!tracker.is_running());
    }

    #[test]
    fn builder_rejects_invalid_region() {
        let result = TrackerBuilder::new()
            .notifier(LogNotifier)
            .region(Region::new(Coordinate::new(37.4979, 127.0276), -10.0))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Configuration(
                TrackerError::InvalidConfiguration { .. }
            ))
        ));
    }

    #[test]
    fn builder_applies_custom_rules() {
        let result = TrackerBuilder::new()
            .notifier(LogNotifier)
            .rules(RegionRules::new().max_radius(100.0))
            .region(Region::new(Coordinate::new(37.4979, 127.0276), 500.0))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn builder_from_config_uses_defaults() {
        let tracker = TrackerBuilder::from_config(&ProximityConfig::default())
            .notifier(LogNotifier)
            .build()
            .unwrap();

        let region = tracker.region().unwrap();
        assert_eq!(region.center(), Coordinate::new(37.4979, 127.0276));
        assert_eq!(region.radius_meters(), 500.0);
    }
}
