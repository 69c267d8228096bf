//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions evaluated against the input that
//! drives a transition. The region monitor uses one to decide whether a
//! fix counts as "inside".

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use tfence::core::Guard;
///
/// let within_500m = Guard::new(|distance: &f64| *distance <= 500.0);
///
/// assert!(within_500m.check(&500.0));
/// assert!(!within_500m.check(&500.1));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this input.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_matching_inputs() {
        let guard = Guard::new(|d: &f64| *d <= 10.0);

        assert!(guard.check(&0.0));
        assert!(guard.check(&10.0));
        assert!(!guard.check(&10.000_001));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|d: &f64| *d < 3.0);

        let result1 = guard.check(&2.5);
        let result2 = guard.check(&2.5);

        assert_eq!(result1, result2);
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|d: &f64| d.is_finite());
        let cloned = guard.clone();

        assert!(cloned.check(&1.0));
        assert!(!cloned.check(&f64::NAN));
    }
}
