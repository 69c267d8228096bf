//! Errors surfaced by the tracker and its builder.

use crate::geo::Coordinate;
use crate::tracker::positioning::AuthorizationStatus;
use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur while configuring or driving a tracker.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackerError {
    #[error("Invalid region configuration: {}", describe(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },

    #[error("Location access not granted (status: {status})")]
    AuthorizationDenied { status: AuthorizationStatus },

    #[error("No region configured. Call configure(region) before start()")]
    NotConfigured,

    #[error("Tracker is running. Call stop() before configure()")]
    AlreadyRunning,

    #[error("Sample coordinate {coordinate} is not a valid position")]
    InvalidSample { coordinate: Coordinate },
}

/// Errors that can occur when building a tracker.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Notifier not specified. Call .notifier(n) before .build()")]
    MissingNotifier,

    #[error(transparent)]
    Configuration(#[from] TrackerError),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_lists_every_violation() {
        let err = TrackerError::InvalidConfiguration {
            violations: vec![
                ConfigViolation::InvalidRadius { radius: 0.0 },
                ConfigViolation::LatitudeOutOfRange { latitude: 91.0 },
            ],
        };

        let message = err.to_string();
        assert!(message.contains("Radius must be a positive"));
        assert!(message.contains("Latitude 91 is outside"));
    }

    #[test]
    fn authorization_denied_names_status() {
        let err = TrackerError::AuthorizationDenied {
            status: AuthorizationStatus::Denied,
        };
        assert_eq!(
            err.to_string(),
            "Location access not granted (status: denied)"
        );
    }
}
