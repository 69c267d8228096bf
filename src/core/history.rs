//! State transition history tracking.
//!
//! Records when the monitor changed state, stamped with the timestamp of
//! the fix that caused the change rather than wall-clock time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use tfence::core::{MonitorState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MonitorState::Outside,
///     to: MonitorState::Inside,
///     timestamp: Utc::now(),
///     distance_meters: 312.5,
/// };
/// assert!(transition.to.is_inside());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Timestamp of the fix that triggered the transition
    pub timestamp: DateTime<Utc>,
    /// Distance to the region center at that fix
    pub distance_meters: f64,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tfence::core::{MonitorState, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: MonitorState::Outside,
    ///     to: MonitorState::Inside,
    ///     timestamp: Utc::now(),
    ///     distance_meters: 120.0,
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonitorState;

    fn entry_at(timestamp: DateTime<Utc>) -> StateTransition<MonitorState> {
        StateTransition {
            from: MonitorState::Outside,
            to: MonitorState::Inside,
            timestamp,
            distance_meters: 250.0,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<MonitorState> = StateHistory::new();
        assert_eq!(history.transitions().len(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(entry_at(Utc::now()));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn last_is_the_latest_transition() {
        let start = Utc::now();
        let later = start + chrono::Duration::seconds(90);
        let history = StateHistory::new()
            .record(entry_at(start))
            .record(entry_at(later));

        assert_eq!(history.last().map(|t| t.timestamp), Some(later));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(entry_at(Utc::now()));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<MonitorState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.transitions(), deserialized.transitions());
    }
}
