//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::handler::HandlerBuilder;
use crate::core::{StateHandler, StateId};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Duplicate registrations fail the whole build; a machine never comes
/// out of `build()` with a silently dropped handler.
pub struct StateMachineBuilder<S: StateId> {
    handlers: Vec<StateHandler<S>>,
}

impl<S: StateId> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler using a builder.
    /// Returns an error if the builder fails validation.
    pub fn handler(mut self, builder: HandlerBuilder<S>) -> Result<Self, BuildError> {
        let handler = builder.build()?;
        self.handlers.push(handler);
        Ok(self)
    }

    /// Add a pre-built handler.
    pub fn add_handler(mut self, handler: StateHandler<S>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Add multiple handlers at once.
    pub fn handlers(mut self, handlers: Vec<StateHandler<S>>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Build the state machine.
    /// Returns an error on an empty build or a duplicate state id.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        if self.handlers.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::new();
        for handler in self.handlers {
            if machine.has_state(handler.id()) {
                return Err(BuildError::DuplicateState {
                    name: handler.id().name().to_string(),
                });
            }
            machine.insert(handler);
        }

        Ok(machine)
    }
}

impl<S: StateId> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Patrol,
        Chase,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Patrol => "Patrol",
                Self::Chase => "Chase",
            }
        }
    }

    #[test]
    fn builder_rejects_empty_build() {
        let result = StateMachineBuilder::<TestState>::new().build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = StateMachineBuilder::new()
            .add_handler(StateHandler::from_parts(TestState::Idle, None, None, None))
            .add_handler(StateHandler::from_parts(TestState::Idle, None, None, None))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateState { ref name }) if name == "Idle"
        ));
    }

    #[test]
    fn builder_propagates_handler_errors() {
        let result = StateMachineBuilder::<TestState>::new().handler(HandlerBuilder::new());

        assert!(matches!(result, Err(BuildError::MissingStateId)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .handler(HandlerBuilder::new().id(TestState::Idle))
            .unwrap()
            .handler(HandlerBuilder::new().id(TestState::Patrol))
            .unwrap()
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.state_count(), 2);
        assert!(machine.has_state(&TestState::Idle));
        assert!(machine.has_state(&TestState::Patrol));
        assert!(!machine.is_running());
    }

    #[test]
    fn add_multiple_handlers() {
        let handlers = vec![
            StateHandler::from_parts(TestState::Idle, None, None, None),
            StateHandler::from_parts(TestState::Patrol, None, None, None),
            StateHandler::from_parts(TestState::Chase, None, None, None),
        ];

        let machine = StateMachineBuilder::new().handlers(handlers).build();

        assert!(machine.is_ok());
        assert_eq!(machine.unwrap().state_count(), 3);
    }
}
