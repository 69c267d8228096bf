//! Core state machine types.
//!
//! This module contains the pure part of the monitor:
//! - State definitions via the `State` trait and `MonitorState`
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or logging.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{MonitorState, State};
