//! Login session toggle: Logged Out ⇄ Logged In.

use crate::core::{Operation, StateHistory};
use crate::fsm::{StateMachine, StateObject, StepResult, Transition};
use crate::state_enum;

state_enum! {
    /// Session state of a single user.
    pub enum AuthState {
        LoggedOut => "Logged Out",
        LoggedIn => "Logged In",
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthOp {
    Login,
    Logout,
}

impl Operation for AuthOp {
    fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

/// Two-state login toggle. Starts logged out.
#[derive(Debug)]
pub struct UserAuthentication {
    machine: StateMachine<AuthState, AuthOp>,
}

impl UserAuthentication {
    pub fn new() -> Self {
        let machine = StateMachine::new(AuthState::LoggedOut).with_transitions([
            Transition::between(
                AuthOp::Login,
                AuthState::LoggedOut,
                AuthState::LoggedIn,
                "Login successful",
            ),
            Transition::between(
                AuthOp::Logout,
                AuthState::LoggedIn,
                AuthState::LoggedOut,
                "Logout successful",
            ),
        ]);
        Self { machine }
    }

    pub fn state(&self) -> AuthState {
        *self.machine.current_state()
    }

    pub fn login(&mut self) -> StepResult<AuthState> {
        self.machine.fire(AuthOp::Login)
    }

    pub fn logout(&mut self) -> StepResult<AuthState> {
        self.machine.fire(AuthOp::Logout)
    }
}

impl Default for UserAuthentication {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObject for UserAuthentication {
    type State = AuthState;
    type Op = AuthOp;

    const OPERATIONS: &'static [AuthOp] = &[AuthOp::Login, AuthOp::Logout];

    fn state(&self) -> &AuthState {
        self.machine.current_state()
    }

    fn history(&self) -> &StateHistory<AuthState> {
        self.machine.history()
    }

    fn apply(&mut self, op: AuthOp) -> StepResult<AuthState> {
        self.machine.fire(op)
    }
}
