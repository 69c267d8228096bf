//! Validation of monitored regions.
//!
//! Built on Stillwater's `Validation` type so that a bad configuration is
//! reported in one pass: a region with a negative radius and an
//! out-of-range latitude yields both violations, not just the first.
//!
//! # Example
//!
//! ```rust
//! use tfence::geo::{Coordinate, Region};
//! use tfence::validation::{ConfigViolation, RegionRules};
//!
//! let region = Region::new(Coordinate::new(95.0, 127.0), 0.0);
//! let violations = RegionRules::new().check(&region).unwrap_err();
//!
//! assert_eq!(violations.len(), 2);
//! assert!(violations
//!     .iter()
//!     .any(|v| matches!(v, ConfigViolation::InvalidRadius { .. })));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{RegionCheck, RegionRules};
pub use violations::ConfigViolation;
