//! Transition table rows and step results.

use crate::core::{Guard, Operation, State};
use std::fmt;
use thiserror::Error;

/// Outcome of firing one operation against a state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// A table row applied and the machine moved to `to`
    Transitioned {
        from: S,
        to: S,
        message: &'static str,
    },

    /// No row applied; the machine is still in `state`
    Rejected { state: S, message: &'static str },
}

impl<S: State> StepResult<S> {
    /// The success message of the applied row, or the rejection message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Transitioned { message, .. } | Self::Rejected { message, .. } => *message,
        }
    }

    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// State of the machine after the step.
    pub fn state(&self) -> &S {
        match self {
            Self::Transitioned { to, .. } => to,
            Self::Rejected { state, .. } => state,
        }
    }

    /// Convert into a `Result` so callers can propagate rejections with `?`.
    pub fn into_result(self) -> Result<S, TransitionError> {
        match self {
            Self::Transitioned { to, .. } => Ok(to),
            Self::Rejected { state, message } => Err(TransitionError::Rejected {
                state: state.name().to_string(),
                message,
            }),
        }
    }
}

impl<S: State> fmt::Display for StepResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors surfaced when a caller opts into `Result`-style handling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{message}")]
    Rejected {
        state: String,
        message: &'static str,
    },
}

/// One row of a transition table: operation `on`, taken while `guard`
/// holds, moves the machine to `to` and reports `message`.
pub struct Transition<S: State, Op: Operation> {
    pub on: Op,
    pub guard: Guard<S>,
    pub to: S,
    pub message: &'static str,
}

impl<S: State + 'static, Op: Operation> Transition<S, Op> {
    /// Row valid only from exactly `from`.
    pub fn between(on: Op, from: S, to: S, message: &'static str) -> Self {
        Self::guarded(on, Guard::is(from), to, message)
    }

    /// Row valid wherever `guard` holds.
    pub fn guarded(on: Op, guard: Guard<S>, to: S, message: &'static str) -> Self {
        Self {
            on,
            guard,
            to,
            message,
        }
    }
}

impl<S: State, Op: Operation> Transition<S, Op> {
    /// Check if this row applies to `op` in the `current` state (pure)
    pub fn can_execute(&self, op: Op, current: &S) -> bool {
        op == self.on && self.guard.check(current)
    }
}

impl<S: State, Op: Operation> Clone for Transition<S, Op> {
    fn clone(&self) -> Self {
        Self {
            on: self.on,
            guard: self.guard.clone(),
            to: self.to.clone(),
            message: self.message,
        }
    }
}

impl<S: State, Op: Operation> fmt::Debug for Transition<S, Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("on", &self.on)
            .field("to", &self.to)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Locked => "Locked",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum DoorOp {
        Close,
        Lock,
    }

    impl Operation for DoorOp {
        fn name(&self) -> &'static str {
            match self {
                Self::Close => "close",
                Self::Lock => "lock",
            }
        }
    }

    #[test]
    fn can_execute_matches_operation_and_state() {
        let row = Transition::between(DoorOp::Close, Door::Open, Door::Closed, "closed");

        assert!(row.can_execute(DoorOp::Close, &Door::Open));
        assert!(!row.can_execute(DoorOp::Close, &Door::Closed));
        assert!(!row.can_execute(DoorOp::Lock, &Door::Open));
    }

    #[test]
    fn guarded_row_respects_guard() {
        let row = Transition::guarded(
            DoorOp::Lock,
            Guard::new(|d: &Door| *d != Door::Open),
            Door::Locked,
            "locked",
        );

        assert!(row.can_execute(DoorOp::Lock, &Door::Closed));
        assert!(row.can_execute(DoorOp::Lock, &Door::Locked));
        assert!(!row.can_execute(DoorOp::Lock, &Door::Open));
    }

    #[test]
    fn step_result_accessors() {
        let applied = StepResult::Transitioned {
            from: Door::Open,
            to: Door::Closed,
            message: "closed",
        };
        assert!(applied.is_transitioned());
        assert_eq!(applied.message(), "closed");
        assert_eq!(applied.state(), &Door::Closed);
        assert_eq!(applied.to_string(), "closed");

        let rejected = StepResult::Rejected {
            state: Door::Locked,
            message: "nope",
        };
        assert!(!rejected.is_transitioned());
        assert_eq!(rejected.message(), "nope");
        assert_eq!(rejected.state(), &Door::Locked);
    }

    #[test]
    fn into_result_maps_rejection_to_error() {
        let applied = StepResult::Transitioned {
            from: Door::Open,
            to: Door::Closed,
            message: "closed",
        };
        assert_eq!(applied.into_result(), Ok(Door::Closed));

        let rejected = StepResult::Rejected {
            state: Door::Locked,
            message: "Invalid operation in current state",
        };
        let err = rejected.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Invalid operation in current state");
        assert_eq!(
            err,
            TransitionError::Rejected {
                state: "Locked".to_string(),
                message: "Invalid operation in current state",
            }
        );
    }

    #[test]
    fn cloned_row_behaves_identically() {
        let row = Transition::between(DoorOp::Close, Door::Open, Door::Closed, "closed");
        let cloned = row.clone();

        assert_eq!(cloned.on, DoorOp::Close);
        assert_eq!(cloned.to, Door::Closed);
        assert!(cloned.can_execute(DoorOp::Close, &Door::Open));
    }
}
