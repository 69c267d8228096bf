//! Configuration violations reported when a region is rejected.

use serde::Serialize;
use thiserror::Error;

/// A single reason a region cannot be monitored.
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
pub enum ConfigViolation {
    #[error("Radius must be a positive, finite number of meters (got {radius})")]
    InvalidRadius { radius: f64 },

    #[error("Radius {radius} m exceeds the configured maximum of {max} m")]
    RadiusTooLarge { radius: f64, max: f64 },

    #[error("Latitude {latitude} is outside [-90, 90]")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude {longitude} is outside [-180, 180]")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
