//! End-to-end scenarios for the ready-made state objects.

use gatekeep::fsm::INVALID_OPERATION;
use gatekeep::objects::{
    AuthState, DocumentEditingSystem, DocumentState, ElevatorState, ElevatorSystem, LightState,
    TrafficLight, UserAuthentication, VendingMachine, VendingState, VENDING_REJECTION,
};
use gatekeep::{State, StateObject};

#[test]
fn login_logout_session() {
    let mut auth = UserAuthentication::new();
    assert_eq!(auth.state(), AuthState::LoggedOut);

    assert_eq!(auth.logout().message(), INVALID_OPERATION);
    assert_eq!(auth.login().message(), "Login successful");
    assert_eq!(auth.login().message(), INVALID_OPERATION);
    assert_eq!(auth.logout().message(), "Logout successful");

    assert_eq!(auth.state(), AuthState::LoggedOut);
    assert_eq!(
        auth.history().get_path(),
        vec![&AuthState::LoggedOut, &AuthState::LoggedIn, &AuthState::LoggedOut]
    );
}

#[test]
fn document_save_and_resume() {
    let mut doc = DocumentEditingSystem::new();

    assert_eq!(doc.save_document().message(), "Document saved successfully");
    assert_eq!(doc.save_document().message(), INVALID_OPERATION);
    assert_eq!(doc.state(), DocumentState::Saved);

    assert_eq!(doc.edit_document().message(), "Editing resumed");
    assert_eq!(doc.edit_document().message(), INVALID_OPERATION);
    assert_eq!(doc.state(), DocumentState::Editing);
}

#[test]
fn elevator_must_stop_before_reversing() {
    let mut elevator = ElevatorSystem::new();

    assert_eq!(elevator.stop().message(), INVALID_OPERATION);
    assert_eq!(elevator.move_up().message(), "Elevator moving up");
    assert_eq!(elevator.move_down().message(), INVALID_OPERATION);
    assert_eq!(elevator.move_up().message(), INVALID_OPERATION);
    assert_eq!(elevator.stop().message(), "Elevator stopped");
    assert_eq!(elevator.move_down().message(), "Elevator moving down");
    assert_eq!(elevator.state(), ElevatorState::MovingDown);

    let transitions = elevator.history().transitions();
    assert_eq!(transitions.len(), 3);
    assert_eq!(transitions[1].operation, "stop");
}

#[test]
fn vending_machine_dispenses_once() {
    let mut vending = VendingMachine::new();

    let first = vending.insert_coin();
    assert!(first.is_transitioned());
    assert_eq!(first.message(), "Coin Inserted. Select your drink.");

    let second = vending.insert_coin();
    assert!(!second.is_transitioned());
    assert_eq!(second.message(), VENDING_REJECTION);
    assert_eq!(vending.state(), VendingState::Dispensing);
    assert!(vending.state().is_final());
}

#[test]
fn vending_machine_can_be_reset_externally() {
    let mut vending = VendingMachine::new();
    vending.insert_coin();

    vending.set_state(VendingState::Ready);
    assert_eq!(vending.state(), VendingState::Ready);
    assert!(vending.insert_coin().is_transitioned());
}

#[test]
fn traffic_light_cycles_with_period_three() {
    let mut light = TrafficLight::new();
    assert_eq!(light.current_state(), LightState::Red);

    assert_eq!(light.change_state().message(), "Light changed to Green");
    assert_eq!(light.change_state().message(), "Light changed to Yellow");
    assert_eq!(light.change_state().message(), "Light changed to Red");
    assert_eq!(light.current_state(), LightState::Red);

    // A fourth change lands on the successor of the starting colour.
    light.change_state();
    assert_eq!(light.current_state(), LightState::Green);
}

#[test]
fn rejected_step_converts_into_error() {
    let mut elevator = ElevatorSystem::new();
    let err = elevator.stop().into_result().unwrap_err();

    assert_eq!(err.to_string(), INVALID_OPERATION);
}

#[test]
fn objects_start_in_documented_states() {
    assert_eq!(UserAuthentication::default().state(), AuthState::LoggedOut);
    assert_eq!(DocumentEditingSystem::default().state(), DocumentState::Editing);
    assert_eq!(ElevatorSystem::default().state(), ElevatorState::Idle);
    assert_eq!(VendingMachine::default().state(), VendingState::Ready);
    assert_eq!(TrafficLight::default().current_state(), LightState::Red);
}
