//! Traffic Light State Machine
//!
//! Builds a cyclic machine from a transition table, then drives the
//! ready-made `TrafficLight` object through two full cycles.
//!
//! Run with: cargo run --example traffic_light

use gatekeep::fsm::{StateMachine, Transition};
use gatekeep::objects::{LightOp, LightState, TrafficLight};
use gatekeep::StateObject;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachine::new(LightState::Red).with_transitions([
        Transition::between(LightOp::Change, LightState::Red, LightState::Green, "Go"),
        Transition::between(LightOp::Change, LightState::Green, LightState::Yellow, "Caution"),
        Transition::between(LightOp::Change, LightState::Yellow, LightState::Red, "Stop"),
    ]);

    println!("Hand-built machine, initial state: {}", machine.current_state());
    for _ in 0..3 {
        let step = machine.fire(LightOp::Change);
        println!("  {} -> {}", step.message(), step.state());
    }

    println!("\nReady-made TrafficLight:");
    let mut light = TrafficLight::new();
    for _ in 0..6 {
        println!("  {}", light.change_state().message());
    }

    println!("\nPath: {:?}", light.history().get_path());
    println!("\n=== Example Complete ===");
}
