//! Guard Patrol State Machine
//!
//! This example demonstrates the host-entity usage pattern: one machine
//! per game object, updated once per tick, with transitions driven by
//! game logic.
//!
//! Key concepts:
//! - Enter/update/exit hooks per state
//! - Change observers
//! - Per-tick dispatch from an update loop
//!
//! Run with: cargo run --example patrol

use framestate::state_id;
use framestate::{HandlerBuilder, StateMachineBuilder};

state_id! {
    enum GuardState {
        Idle,
        Patrol,
        Chase,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut machine = StateMachineBuilder::new()
        .handler(
            HandlerBuilder::new()
                .id(GuardState::Idle)
                .on_enter(|| println!("  [idle] leaning on a wall"))
                .on_update(|| println!("  [idle] yawning")),
        )?
        .handler(
            HandlerBuilder::new()
                .id(GuardState::Patrol)
                .on_enter(|| println!("  [patrol] starting the route"))
                .on_update(|| println!("  [patrol] walking"))
                .on_exit(|| println!("  [patrol] leaving the route")),
        )?
        .handler(
            HandlerBuilder::new()
                .id(GuardState::Chase)
                .on_enter(|| println!("  [chase] intruder spotted!"))
                .on_update(|| println!("  [chase] running")),
        )?
        .build()?;

    machine.on_state_changed(|prev, curr| println!("guard: {prev:?} -> {curr:?}"));

    println!("=== Guard Patrol ===\n");
    machine.start(GuardState::Idle)?;

    // Scripted tick loop standing in for the engine's update hook.
    for tick in 0..6 {
        match tick {
            2 => machine.change_state(GuardState::Patrol)?,
            4 => machine.change_state(GuardState::Chase)?,
            _ => {}
        }
        machine.update()?;
    }

    machine.change_state(GuardState::Idle)?;
    machine.update()?;

    println!("\n=== Example Complete ===");
    Ok(())
}
