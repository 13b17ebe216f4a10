//! Traffic Light Cycle
//!
//! This example demonstrates a cyclic machine built from hook-less
//! handlers, observed entirely through change notifications.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - `noop_handler` for states with no behavior of their own
//! - Change observers as the only side channel
//!
//! Run with: cargo run --example cycle

use framestate::builder::noop_handler;
use framestate::state_id;
use framestate::StateMachineBuilder;

state_id! {
    enum Light {
        Red,
        Green,
        Amber,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut machine = StateMachineBuilder::new()
        .handlers(vec![
            noop_handler(Light::Red),
            noop_handler(Light::Green),
            noop_handler(Light::Amber),
        ])
        .build()?;

    machine.on_state_changed(|prev, curr| println!("light: {prev:?} -> {curr:?}"));

    println!("=== Traffic Light Cycle ===\n");
    machine.start(Light::Red)?;

    for _ in 0..2 {
        machine.change_state(Light::Green)?;
        machine.change_state(Light::Amber)?;
        machine.change_state(Light::Red)?;
    }

    println!("\nBack at {:?} after two full cycles", machine.current_state().unwrap());
    println!("\n=== Example Complete ===");
    Ok(())
}
