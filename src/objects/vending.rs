//! One-shot vending machine: Ready → Dispensing.

use crate::core::{Operation, StateHistory};
use crate::fsm::{StateMachine, StateObject, StepResult, Transition};
use crate::state_enum;

state_enum! {
    pub enum VendingState {
        Ready,
        Dispensing,
    }
    final: [Dispensing]
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VendingOp {
    InsertCoin,
}

impl Operation for VendingOp {
    fn name(&self) -> &'static str {
        "insert_coin"
    }
}

/// Vending machine rejections end with a period, unlike the other objects.
pub const VENDING_REJECTION: &str = "Invalid operation in current state.";

#[derive(Debug)]
pub struct VendingMachine {
    machine: StateMachine<VendingState, VendingOp>,
}

impl VendingMachine {
    pub fn new() -> Self {
        let machine = StateMachine::new(VendingState::Ready)
            .with_rejection(VENDING_REJECTION)
            .with_transitions([Transition::between(
                VendingOp::InsertCoin,
                VendingState::Ready,
                VendingState::Dispensing,
                "Coin Inserted. Select your drink.",
            )]);
        Self { machine }
    }

    pub fn state(&self) -> VendingState {
        *self.machine.current_state()
    }

    /// Overwrite the state directly, bypassing the transition table.
    pub fn set_state(&mut self, state: VendingState) {
        self.machine.set_state(state);
    }

    pub fn insert_coin(&mut self) -> StepResult<VendingState> {
        self.machine.fire(VendingOp::InsertCoin)
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObject for VendingMachine {
    type State = VendingState;
    type Op = VendingOp;

    const OPERATIONS: &'static [VendingOp] = &[VendingOp::InsertCoin];

    fn state(&self) -> &VendingState {
        self.machine.current_state()
    }

    fn history(&self) -> &StateHistory<VendingState> {
        self.machine.history()
    }

    fn apply(&mut self, op: VendingOp) -> StepResult<VendingState> {
        self.machine.fire(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn starts_ready() {
        let vending = VendingMachine::new();
        assert_eq!(vending.state(), VendingState::Ready);
        assert!(!vending.state().is_final());
    }

    #[test]
    fn insert_coin_success() {
        let mut vending = VendingMachine::new();

        let output = vending.insert_coin();

        assert_eq!(output.message(), "Coin Inserted. Select your drink.");
        assert_eq!(vending.state(), VendingState::Dispensing);
        assert!(vending.state().is_final());
    }

    #[test]
    fn insert_coin_error_after_overwrite() {
        let mut vending = VendingMachine::new();
        vending.set_state(VendingState::Dispensing);

        let output = vending.insert_coin();

        assert_eq!(output.message(), "Invalid operation in current state.");
        assert_eq!(vending.state(), VendingState::Dispensing);
    }

    #[test]
    fn set_state_accepts_parsed_label() {
        let mut vending = VendingMachine::new();
        vending.set_state("Dispensing".parse().unwrap());
        assert_eq!(vending.state(), VendingState::Dispensing);

        vending.set_state(VendingState::Ready);
        assert!(vending.insert_coin().is_transitioned());
    }

    #[test]
    fn dispensing_always_rejects() {
        let mut vending = VendingMachine::new();
        vending.insert_coin();

        for _ in 0..3 {
            assert_eq!(vending.insert_coin().message(), VENDING_REJECTION);
            assert_eq!(vending.state(), VendingState::Dispensing);
        }
        assert_eq!(StateObject::history(&vending).len(), 1);
    }
}
