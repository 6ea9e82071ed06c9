//! State transition history tracking.
//!
//! Provides immutable tracking of applied transitions over time. Rejected
//! operations never appear in a history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use gatekeep::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     operation: "switch".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.operation, "switch");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the operation that caused the transition
    pub operation: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use gatekeep::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
///     Yellow,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///             Self::Yellow => "Yellow",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Light::Red,
///         to: Light::Green,
///         operation: "change".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Light::Green,
///         to: Light::Yellow,
///         operation: "change".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Light::Red, &Light::Green, &Light::Yellow]);
/// ```
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
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration from the first to the last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Editing,
        Saved,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Editing => "Editing",
                Self::Saved => "Saved",
            }
        }
    }

    fn transition(from: TestState, to: TestState, operation: &str) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            operation: operation.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(TestState::Editing, TestState::Saved, "save"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(TestState::Editing, TestState::Saved, "save"))
            .record(transition(TestState::Saved, TestState::Editing, "edit"));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Editing);
        assert_eq!(path[1], &TestState::Saved);
        assert_eq!(path[2], &TestState::Editing);
    }

    #[test]
    fn last_returns_most_recent_operation() {
        let history = StateHistory::new()
            .record(transition(TestState::Editing, TestState::Saved, "save"))
            .record(transition(TestState::Saved, TestState::Editing, "edit"));

        let last = history.last().unwrap();
        assert_eq!(last.operation, "edit");
        assert_eq!(last.to, TestState::Editing);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history =
            StateHistory::new().record(transition(TestState::Editing, TestState::Saved, "save"));

        std::thread::sleep(Duration::from_millis(10));

        let history = history.record(transition(TestState::Saved, TestState::Editing, "edit"));

        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(transition(TestState::Editing, TestState::Saved, "save"));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(transition(TestState::Editing, TestState::Saved, "save"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].operation, "save");
        assert_eq!(deserialized.transitions()[0].to, TestState::Saved);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();

        history.push(transition(TestState::Editing, TestState::Saved, "save"));
        history.push(transition(TestState::Saved, TestState::Editing, "edit"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().operation, "edit");
    }
}
