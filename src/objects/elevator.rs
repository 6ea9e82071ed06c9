//! Elevator direction control: Idle, Moving Up, Moving Down.
//!
//! Direction never changes without passing through `Idle`.

use crate::core::{Guard, Operation, StateHistory};
use crate::fsm::{StateMachine, StateObject, StepResult, Transition};
use crate::state_enum;

state_enum! {
    pub enum ElevatorState {
        Idle,
        MovingUp => "Moving Up",
        MovingDown => "Moving Down",
    }
}

impl ElevatorState {
    pub fn is_moving(self) -> bool {
        matches!(self, Self::MovingUp | Self::MovingDown)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ElevatorOp {
    MoveUp,
    MoveDown,
    Stop,
}

impl Operation for ElevatorOp {
    fn name(&self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug)]
pub struct ElevatorSystem {
    machine: StateMachine<ElevatorState, ElevatorOp>,
}

impl ElevatorSystem {
    pub fn new() -> Self {
        let machine = StateMachine::new(ElevatorState::Idle).with_transitions([
            Transition::between(
                ElevatorOp::MoveUp,
                ElevatorState::Idle,
                ElevatorState::MovingUp,
                "Elevator moving up",
            ),
            Transition::between(
                ElevatorOp::MoveDown,
                ElevatorState::Idle,
                ElevatorState::MovingDown,
                "Elevator moving down",
            ),
            Transition::guarded(
                ElevatorOp::Stop,
                Guard::any_of([ElevatorState::MovingUp, ElevatorState::MovingDown]),
                ElevatorState::Idle,
                "Elevator stopped",
            ),
        ]);
        Self { machine }
    }

    pub fn state(&self) -> ElevatorState {
        *self.machine.current_state()
    }

    pub fn move_up(&mut self) -> StepResult<ElevatorState> {
        self.machine.fire(ElevatorOp::MoveUp)
    }

    pub fn move_down(&mut self) -> StepResult<ElevatorState> {
        self.machine.fire(ElevatorOp::MoveDown)
    }

    pub fn stop(&mut self) -> StepResult<ElevatorState> {
        self.machine.fire(ElevatorOp::Stop)
    }
}

impl Default for ElevatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObject for ElevatorSystem {
    type State = ElevatorState;
    type Op = ElevatorOp;

    const OPERATIONS: &'static [ElevatorOp] =
        &[ElevatorOp::MoveUp, ElevatorOp::MoveDown, ElevatorOp::Stop];

    fn state(&self) -> &ElevatorState {
        self.machine.current_state()
    }

    fn history(&self) -> &StateHistory<ElevatorState> {
        self.machine.history()
    }

    fn apply(&mut self, op: ElevatorOp) -> StepResult<ElevatorState> {
        self.machine.fire(op)
    }
}
