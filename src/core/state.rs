//! Core State trait and the region monitor's states.
//!
//! States are plain values; inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into transition records
/// - `PartialEq`: States are compared when deciding transitions
/// - `Debug`: States show up in logs and diagnostics
/// - `Serialize` + `Deserialize`: States are published to observers
///
/// # Example
///
/// ```rust
/// use tfence::core::{MonitorState, State};
///
/// assert_eq!(MonitorState::Outside.name(), "Outside");
/// assert!(MonitorState::Inside.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No further transitions leave a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of the subject relative to the monitored region.
///
/// The monitor starts `Outside` and moves to `Inside` on the first fix
/// within the radius. There is no exit transition, so `Inside` is final
/// for the rest of the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum MonitorState {
    #[default]
    Outside,
    Inside,
}

impl MonitorState {
    pub fn is_inside(&self) -> bool {
        matches!(self, Self::Inside)
    }
}

impl State for MonitorState {
    fn name(&self) -> &str {
        match self {
            Self::Outside => "Outside",
            Self::Inside => "Inside",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Inside)
    }
}
