//! Cyclic traffic light: Red → Green → Yellow → Red.

use crate::core::{Operation, StateHistory};
use crate::fsm::{StateMachine, StateObject, StepResult, Transition};
use crate::state_enum;

state_enum! {
    pub enum LightState {
        Red,
        Green,
        Yellow,
    }
}

impl LightState {
    /// The next state in the fixed cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LightOp {
    Change,
}

impl Operation for LightOp {
    fn name(&self) -> &'static str {
        "change_state"
    }
}

/// Advances unconditionally; there is no rejection case.
#[derive(Debug)]
pub struct TrafficLight {
    machine: StateMachine<LightState, LightOp>,
}

impl TrafficLight {
    pub fn new() -> Self {
        let machine = StateMachine::new(LightState::Red).with_transitions(
            LightState::VARIANTS.iter().map(|&state| {
                let to = state.next();
                Transition::between(LightOp::Change, state, to, change_message(to))
            }),
        );
        Self { machine }
    }

    pub fn current_state(&self) -> LightState {
        *self.machine.current_state()
    }

    pub fn change_state(&mut self) -> StepResult<LightState> {
        self.machine.fire(LightOp::Change)
    }
}

fn change_message(to: LightState) -> &'static str {
    match to {
        LightState::Red => "Light changed to Red",
        LightState::Green => "Light changed to Green",
        LightState::Yellow => "Light changed to Yellow",
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObject for TrafficLight {
    type State = LightState;
    type Op = LightOp;

    const OPERATIONS: &'static [LightOp] = &[LightOp::Change];

    fn state(&self) -> &LightState {
        self.machine.current_state()
    }

    fn history(&self) -> &StateHistory<LightState> {
        self.machine.history()
    }

    fn apply(&mut self, op: LightOp) -> StepResult<LightState> {
        self.machine.fire(op)
    }
}
