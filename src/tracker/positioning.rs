//! Inputs from the positioning subsystem.
//!
//! The positioning subsystem owns sensor acquisition and retries. The
//! tracker only sees what it delivers: fixes, failures and authorization
//! changes, serially and in arrival order.

use crate::geo::Sample;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Location permission as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    #[default]
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// Either "authorized" variant lets tracking start.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::AuthorizedWhenInUse | Self::AuthorizedAlways)
    }

    /// The user or policy has refused access.
    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Restricted | Self::Denied)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotDetermined => "not_determined",
            Self::Restricted => "restricted",
            Self::Denied => "denied",
            Self::AuthorizedWhenInUse => "authorized_when_in_use",
            Self::AuthorizedAlways => "authorized_always",
        };
        f.write_str(name)
    }
}

/// Transient delivery failure. Never changes monitor state.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PositioningFailure {
    #[error("Location signal lost")]
    SignalLost,

    #[error("Location access denied by the platform")]
    Denied,

    #[error("Positioning failed: {0}")]
    Other(String),
}

/// One item of the ordered stream the positioning subsystem delivers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PositioningEvent {
    Fix(Sample),
    Failure(PositioningFailure),
    Authorization(AuthorizationStatus),
}

impl From<Sample> for PositioningEvent {
    fn from(sample: Sample) -> Self {
        Self::Fix(sample)
    }
}

impl From<PositioningFailure> for PositioningEvent {
    fn from(failure: PositioningFailure) -> Self {
        Self::Failure(failure)
    }
}

impl From<AuthorizationStatus> for PositioningEvent {
    fn from(status: AuthorizationStatus) -> Self {
        Self::Authorization(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_statuses() {
        assert!(AuthorizationStatus::AuthorizedAlways.is_granted());
        assert!(AuthorizationStatus::AuthorizedWhenInUse.is_granted());
        assert!(!AuthorizationStatus::NotDetermined.is_granted());
        assert!(!AuthorizationStatus::Denied.is_granted());
        assert!(!AuthorizationStatus::Restricted.is_granted());
    }

    #[test]
    fn refused_statuses() {
        assert!(AuthorizationStatus::Denied.is_refused());
        assert!(AuthorizationStatus::Restricted.is_refused());
        assert!(!AuthorizationStatus::NotDetermined.is_refused());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&AuthorizationStatus::AuthorizedWhenInUse).unwrap();
        assert_eq!(json, "\"authorized_when_in_use\"");
    }
}
