//! Shared behavioural contract of the concrete state objects.

use crate::core::{Operation, State, StateHistory};
use crate::fsm::transition::StepResult;

/// A state object driven by a fixed set of operations.
///
/// Every implementor keeps exactly one current state drawn from its own
/// enumeration, and changes it only through `apply`.
pub trait StateObject {
    type State: State + 'static;
    type Op: Operation + 'static;

    /// Every operation the object understands.
    const OPERATIONS: &'static [Self::Op];

    fn state(&self) -> &Self::State;

    fn history(&self) -> &StateHistory<Self::State>;

    /// Fire one operation.
    fn apply(&mut self, op: Self::Op) -> StepResult<Self::State>;
}
