//! Guard predicates for controlling state transitions.
//!
//! A guard is the precondition on the current state that must hold for a
//! transition to take effect. Guards are pure and never mutate the state.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use gatekeep::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Busy,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// let from_idle = Guard::is(Phase::Idle);
/// assert!(from_idle.check(&Phase::Idle));
/// assert!(!from_idle.check(&Phase::Busy));
///
/// let not_done = Guard::new(|p: &Phase| *p != Phase::Done);
/// assert!(not_done.check(&Phase::Busy));
/// assert!(!not_done.check(&Phase::Done));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State + 'static> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that holds only in exactly `state`.
    pub fn is(state: S) -> Self {
        Self::new(move |current| *current == state)
    }

    /// Guard that holds in any of `states`.
    pub fn any_of<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let states: Vec<S> = states.into_iter().collect();
        Self::new(move |current| states.contains(current))
    }
}

impl<S: State> Guard<S> {
    /// Evaluate the predicate against `state`.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
