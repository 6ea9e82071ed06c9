//! State machine that applies table-driven, guarded transitions.

use crate::core::{Operation, State, StateHistory, StateTransition};
use crate::fsm::transition::{StepResult, Transition};
use chrono::Utc;
use tracing::debug;

/// Message returned when no table row applies.
pub const INVALID_OPERATION: &str = "Invalid operation in current state";

/// Owns the current state, the transition table and the history.
///
/// Every operation is an immediate, total function of the current state:
/// either one row applies and the state changes, or nothing changes and the
/// rejection message is reported.
#[derive(Debug)]
pub struct StateMachine<S: State, Op: Operation> {
    current: S,
    transitions: Vec<Transition<S, Op>>,
    history: StateHistory<S>,
    rejection: &'static str,
}

impl<S: State, Op: Operation> StateMachine<S, Op> {
    /// Create a machine in `initial` with an empty table.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
            rejection: INVALID_OPERATION,
        }
    }

    /// Override the message reported for rejected operations.
    pub fn with_rejection(mut self, message: &'static str) -> Self {
        self.rejection = message;
        self
    }

    /// Append a row to the table. Earlier rows win when several apply.
    pub fn add_transition(&mut self, transition: Transition<S, Op>) {
        self.transitions.push(transition);
    }

    pub fn with_transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, Op>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn rejection_message(&self) -> &'static str {
        self.rejection
    }

    pub fn transitions(&self) -> &[Transition<S, Op>] {
        &self.transitions
    }

    /// Whether `op` would be accepted in the current state (pure)
    pub fn can_fire(&self, op: Op) -> bool {
        self.find(op).is_some()
    }

    /// Operations accepted in the current state, in table order, deduplicated.
    pub fn permitted_operations(&self) -> Vec<Op> {
        let mut ops: Vec<Op> = Vec::new();
        for row in &self.transitions {
            if row.guard.check(&self.current) && !ops.contains(&row.on) {
                ops.push(row.on);
            }
        }
        ops
    }

    /// Overwrite the current state without consulting the table.
    ///
    /// The overwrite is not recorded in the history.
    pub fn set_state(&mut self, state: S) {
        debug!(from = self.current.name(), to = state.name(), "state overwritten");
        self.current = state;
    }

    /// Fire `op`: apply the first matching row, or reject with the state
    /// unchanged.
    pub fn fire(&mut self, op: Op) -> StepResult<S> {
        let Some(row) = self.find(op) else {
            debug!(
                operation = op.name(),
                state = self.current.name(),
                "operation rejected"
            );
            return StepResult::Rejected {
                state: self.current.clone(),
                message: self.rejection,
            };
        };

        let to = row.to.clone();
        let message = row.message;
        let from = std::mem::replace(&mut self.current, to.clone());

        debug!(
            operation = op.name(),
            from = from.name(),
            to = to.name(),
            "transition applied"
        );

        self.history.push(StateTransition {
            from: from.clone(),
            to: to.clone(),
            operation: op.name().to_string(),
            timestamp: Utc::now(),
        });

        StepResult::Transitioned { from, to, message }
    }

    fn find(&self, op: Op) -> Option<&Transition<S, Op>> {
        self.transitions
            .iter()
            .find(|t| t.can_execute(op, &self.current))
    }
}
