//! Gatekeep: guarded finite-state objects with explicit transition tables.
//!
//! Every object keeps exactly one current state drawn from its own
//! enumeration. Operations either apply a row of the object's transition
//! table (the state changes and a success message is returned) or are
//! rejected (the state is unchanged and a fixed rejection message is
//! returned). Nothing partially applies.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Guards**: Pure predicates over the current state that control transitions
//! - **History**: Immutable record of applied transitions
//! - **Objects**: Ready-made state objects built on the above
//!
//! # Example
//!
//! ```rust
//! use gatekeep::objects::{ElevatorState, ElevatorSystem};
//!
//! let mut elevator = ElevatorSystem::new();
//!
//! assert_eq!(elevator.move_up().message(), "Elevator moving up");
//! assert_eq!(
//!     elevator.move_down().message(),
//!     "Invalid operation in current state"
//! );
//! assert_eq!(elevator.state(), ElevatorState::MovingUp);
//!
//! assert_eq!(elevator.stop().message(), "Elevator stopped");
//! assert_eq!(elevator.state(), ElevatorState::Idle);
//! ```

mod macros;

pub mod banking;
pub mod core;
pub mod fsm;
pub mod objects;

// Re-export commonly used types
pub use crate::core::{Guard, Operation, State, StateHistory, StateTransition};
pub use crate::fsm::{StateMachine, StateObject, StepResult};
