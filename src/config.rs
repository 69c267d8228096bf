//! Configuration loading from TOML or JSON files.
//!
//! Every section is optional; missing values fall back to the built-in
//! target (Gangnam Station, 500 m) and the default alert text.
//!
//! ```toml
//! [region]
//! latitude = 37.4979
//! longitude = 127.0276
//! radius_meters = 500.0
//!
//! [notification]
//! title = "T-Fence"
//! body = "You are within {radius} m of the target."
//!
//! [limits]
//! max_radius_meters = 10000.0
//! ```

use crate::geo::{Coordinate, Region};
use crate::tracker::MessageTemplate;
use crate::tracker::{DEFAULT_BODY, DEFAULT_TITLE};
use crate::validation::{ConfigViolation, RegionRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LATITUDE: f64 = 37.4979;
pub const DEFAULT_LONGITUDE: f64 = 127.0276;
pub const DEFAULT_RADIUS_METERS: f64 = 500.0;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configured region is invalid: {violations:?}")]
    InvalidRegion { violations: Vec<ConfigViolation> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_radius_meters")]
    pub radius_meters: f64,
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_radius_meters() -> f64 {
    DEFAULT_RADIUS_METERS
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            radius_meters: default_radius_meters(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// `{radius}` is replaced by the radius in meters
    #[serde(default = "default_body")]
    pub body: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_body() -> String {
    DEFAULT_BODY.to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            body: default_body(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Upper bound on the region radius (unbounded when absent)
    #[serde(default)]
    pub max_radius_meters: Option<f64>,
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProximityConfig {
    #[serde(default)]
    pub region: RegionConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl ProximityConfig {
    /// Load from a file. `.json` files are parsed as JSON, anything else
    /// as TOML. The region is validated before returning.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the region against [`rules`](Self::rules).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules()
            .check(&self.region())
            .map_err(|violations| ConfigError::InvalidRegion { violations })
    }

    pub fn region(&self) -> Region {
        Region::new(
            Coordinate::new(self.region.latitude, self.region.longitude),
            self.region.radius_meters,
        )
    }

    pub fn message(&self) -> MessageTemplate {
        MessageTemplate::new(&self.notification.title, &self.notification.body)
    }

    pub fn rules(&self) -> RegionRules {
        match self.limits.max_radius_meters {
            Some(max) => RegionRules::new().max_radius(max),
            None => RegionRules::new(),
        }
    }
}
