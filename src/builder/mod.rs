//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a macro for creating
//! machines with minimal boilerplate while keeping duplicate state
//! registration a build-time failure.

pub mod error;
pub mod handler;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use handler::HandlerBuilder;
pub use machine::StateMachineBuilder;

use crate::core::{StateHandler, StateId};

/// Create a handler with no hooks attached.
///
/// Useful for states that only exist as transition targets, e.g. a dead
/// state whose behavior lives entirely in the transition out of the
/// previous one.
///
/// # Example
///
/// ```
/// use framestate::builder::noop_handler;
/// use framestate::state_id;
///
/// state_id! {
///     enum MyState {
///         Alive,
///         Dead,
///     }
/// }
///
/// let handler = noop_handler(MyState::Dead);
/// assert_eq!(handler.id(), &MyState::Dead);
/// ```
pub fn noop_handler<S: StateId>(id: S) -> StateHandler<S> {
    HandlerBuilder::new()
        .id(id)
        .build()
        .expect("handler with an id always builds")
}
