//! Region validation rules using Validation.

use crate::geo::Region;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type RegionCheck =
    Box<dyn Fn(&Region) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync>;

/// Rules a region must satisfy before it can be monitored.
///
/// The built-in checks (positive finite radius, latitude and longitude in
/// range) always run. Every failing check is reported, not only the first.
pub struct RegionRules {
    max_radius: Option<f64>,
    required_checks: Vec<RegionCheck>,
}

impl Default for RegionRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRules {
    /// Only the built-in checks.
    pub fn new() -> Self {
        Self {
            max_radius: None,
            required_checks: Vec::new(),
        }
    }

    /// Reject regions with a radius above `meters`.
    pub fn max_radius(mut self, meters: f64) -> Self {
        self.max_radius = Some(meters);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Region) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Region) -> bool + Send + Sync + 'static,
    {
        let check = move |region: &Region| {
            if predicate(region) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Run every check, accumulating ALL violations.
    pub fn enforce(&self, region: &Region) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let radius = region.radius_meters();
        checks.push(if radius.is_finite() && radius > 0.0 {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::InvalidRadius { radius })
        });

        if let Some(max) = self.max_radius {
            // Non-finite radii are already reported above.
            if radius.is_finite() && radius > max {
                checks.push(Validation::fail(ConfigViolation::RadiusTooLarge {
                    radius,
                    max,
                }));
            }
        }

        let center = region.center();
        checks.push(
            if center.latitude.is_finite() && (-90.0..=90.0).contains(&center.latitude) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::LatitudeOutOfRange {
                    latitude: center.latitude,
                })
            },
        );
        checks.push(
            if center.longitude.is_finite() && (-180.0..=180.0).contains(&center.longitude) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::LongitudeOutOfRange {
                    longitude: center.longitude,
                })
            },
        );

        for check_fn in &self.required_checks {
            checks.push(check_fn(region));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`enforce`](Self::enforce) flattened into a `Result`.
    pub fn check(&self, region: &Region) -> Result<(), Vec<ConfigViolation>> {
        match self.enforce(region) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
