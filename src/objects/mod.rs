//! Concrete guarded state objects.
//!
//! Each object wraps one [`StateMachine`](crate::fsm::StateMachine) built
//! from an explicit transition table and implements
//! [`StateObject`](crate::fsm::StateObject).

pub mod auth;
pub mod document;
pub mod elevator;
pub mod traffic;
pub mod vending;

pub use auth::{AuthOp, AuthState, UserAuthentication};
pub use document::{DocumentEditingSystem, DocumentOp, DocumentState};
pub use elevator::{ElevatorOp, ElevatorState, ElevatorSystem};
pub use traffic::{LightOp, LightState, TrafficLight};
pub use vending::{VendingMachine, VendingOp, VendingState, VENDING_REJECTION};
