//! Build errors for machine and handler builders.

use thiserror::Error;

/// Errors that can occur when building machines and handlers.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State '{name}' registered more than once. Each state id must be unique")]
    DuplicateState { name: String },

    #[error("No states registered. Add at least one handler")]
    NoStates,

    #[error("Handler state id not specified. Call .id(state) before .build()")]
    MissingStateId,
}
