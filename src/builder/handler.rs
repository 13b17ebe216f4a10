//! Builder for constructing state handlers.

use crate::builder::error::BuildError;
use crate::core::{Hook, StateHandler, StateId};

/// Builder for constructing handlers with a fluent API.
///
/// The state id is required; every hook is optional and defaults to a
/// no-op.
pub struct HandlerBuilder<S: StateId> {
    id: Option<S>,
    on_enter: Option<Hook>,
    on_update: Option<Hook>,
    on_exit: Option<Hook>,
}

impl<S: StateId> HandlerBuilder<S> {
    /// Create a new handler builder.
    pub fn new() -> Self {
        Self {
            id: None,
            on_enter: None,
            on_update: None,
            on_exit: None,
        }
    }

    /// Set the state id (required).
    pub fn id(mut self, state: S) -> Self {
        self.id = Some(state);
        self
    }

    /// Set the hook invoked when the state is entered (optional).
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked on every tick spent in the state (optional).
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked when the state is exited (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Build the handler.
    /// Returns an error if the state id is missing.
    pub fn build(self) -> Result<StateHandler<S>, BuildError> {
        let id = self.id.ok_or(BuildError::MissingStateId)?;

        Ok(StateHandler::from_parts(
            id,
            self.on_enter,
            self.on_update,
            self.on_exit,
        ))
    }
}

impl<S: StateId> Default for HandlerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Patrol,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Patrol => "Patrol",
            }
        }
    }

    #[test]
    fn builder_validates_missing_id() {
        let result = HandlerBuilder::<TestState>::new()
            .on_enter(|| {})
            .build();

        assert!(matches!(result, Err(BuildError::MissingStateId)));
    }

    #[test]
    fn hooks_are_optional() {
        let result = HandlerBuilder::new().id(TestState::Idle).build();

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id(), &TestState::Idle);
    }

    #[test]
    fn fluent_api_builds_handler() {
        let entered = Rc::new(Cell::new(false));
        let e = Rc::clone(&entered);

        let handler = HandlerBuilder::new()
            .id(TestState::Patrol)
            .on_enter(move || e.set(true))
            .on_update(|| {})
            .on_exit(|| {})
            .build()
            .unwrap();

        assert_eq!(handler.id(), &TestState::Patrol);
        let rendered = format!("{handler:?}");
        assert!(rendered.contains("on_enter: true"));
        assert!(rendered.contains("on_update: true"));
        assert!(rendered.contains("on_exit: true"));
    }
}
