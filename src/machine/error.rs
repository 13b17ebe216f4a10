//! Runtime errors for machine lifecycle operations.

use thiserror::Error;

/// Errors surfaced by the machine's lifecycle operations.
///
/// All of these are caller-usage errors, not transient failures; there
/// is nothing to retry.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("State '{name}' is not registered on this machine")]
    UnknownState { name: String },

    #[error("Machine not started. Call .start(initial) before driving it")]
    NotStarted,

    #[error("State '{name}' is already registered; first registration kept")]
    DuplicateState { name: String },

    #[error("Machine already started. Use .change_state(next) to move on")]
    AlreadyStarted,
}
