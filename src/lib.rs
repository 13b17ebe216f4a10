//! Framestate: a tiny callback-driven state machine for game objects.
//!
//! A [`StateMachine`] owns one [`StateHandler`] per state, each carrying
//! optional enter/update/exit hooks. The host object starts the machine
//! once, calls [`StateMachine::update`] from its per-frame update hook,
//! and calls [`StateMachine::change_state`] when its game logic decides
//! to move. Everything runs synchronously on the calling thread.
//!
//! # Core Concepts
//!
//! - **State ids**: type-safe identifiers via the [`StateId`] trait
//!   (or the [`state_id!`] macro for plain enums)
//! - **Handlers**: per-state enter/update/exit hook bundles
//! - **Observers**: change notifications with `(previous, current)`
//!
//! # Example
//!
//! ```rust
//! use framestate::{HandlerBuilder, StateMachineBuilder};
//! use framestate::state_id;
//!
//! state_id! {
//!     enum GuardState {
//!         Idle,
//!         Patrol,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .handler(HandlerBuilder::new().id(GuardState::Idle).on_enter(|| println!("standing down")))?
//!     .handler(HandlerBuilder::new().id(GuardState::Patrol).on_update(|| println!("walking the route")))?
//!     .build()?;
//!
//! machine.on_state_changed(|prev, curr| println!("{prev:?} -> {curr:?}"));
//!
//! machine.start(GuardState::Idle)?;
//! machine.update()?;
//! machine.change_state(GuardState::Patrol)?;
//! assert_eq!(machine.current_state(), Some(&GuardState::Patrol));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, HandlerBuilder, StateMachineBuilder};
pub use self::core::{Hook, StateHandler, StateId};
pub use self::machine::{MachineError, ObserverId, StateMachine};
