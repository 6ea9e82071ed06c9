//! Table-driven state machine execution.
//!
//! A machine is a tagged enumeration of states plus an explicit transition
//! table (state × operation → new state, message). Firing an operation is
//! synchronous and total: one row applies, or the operation is rejected and
//! nothing changes.

mod machine;
mod object;
mod transition;

pub use machine::{StateMachine, INVALID_OPERATION};
pub use object::StateObject;
pub use transition::{StepResult, Transition, TransitionError};
