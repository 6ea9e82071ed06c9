//! Core state machine types.
//!
//! This module contains the pure vocabulary shared by every state object:
//! - State definitions via the `State` trait
//! - Operation tags via the `Operation` trait
//! - Guard predicates for transition control
//! - Immutable history tracking

mod guard;
mod history;
mod operation;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use operation::Operation;
pub use state::{ParseStateError, State};
