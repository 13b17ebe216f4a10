//! State machine driven by a host update loop.

use crate::core::{StateHandler, StateId};
use crate::machine::error::MachineError;
use log::{debug, warn};
use std::collections::HashMap;

/// Handle returned when registering a change observer, used to
/// unregister it later.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ObserverId(u64);

type ChangeObserver<S> = Box<dyn FnMut(&S, &S)>;

/// Callback-driven state machine for a single game object.
///
/// The host registers one [`StateHandler`] per state, calls [`start`]
/// once, then drives the machine with [`update`] every tick and
/// [`change_state`] whenever its game logic decides to move. All
/// operations run synchronously on the calling thread; the machine is
/// not thread-safe and owns its handlers exclusively.
///
/// Until [`start`] the machine is uninitialized: [`update`] and
/// [`change_state`] report [`MachineError::NotStarted`] instead of
/// dispatching. There is no terminal state and no stop operation.
///
/// [`start`]: StateMachine::start
/// [`update`]: StateMachine::update
/// [`change_state`]: StateMachine::change_state
pub struct StateMachine<S: StateId> {
    handlers: HashMap<S, StateHandler<S>>,
    current: Option<S>,
    previous: Option<S>,
    observers: Vec<(ObserverId, ChangeObserver<S>)>,
    next_observer: u64,
}

impl<S: StateId> StateMachine<S> {
    /// Create an empty machine with no registered states.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            current: None,
            previous: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Register one additional handler after construction.
    ///
    /// If the identifier is already registered the first handler stays
    /// in place, a `warn!` diagnostic is emitted, and
    /// [`MachineError::DuplicateState`] is returned.
    pub fn add_handler(&mut self, handler: StateHandler<S>) -> Result<(), MachineError> {
        if self.handlers.contains_key(handler.id()) {
            warn!(
                "duplicate state registration ignored: {}",
                handler.id().name()
            );
            return Err(MachineError::DuplicateState {
                name: handler.id().name().to_string(),
            });
        }
        self.insert(handler);
        Ok(())
    }

    /// Insert without the duplicate check. The builder validates keys
    /// itself before calling this.
    pub(crate) fn insert(&mut self, handler: StateHandler<S>) {
        self.handlers.insert(handler.id().clone(), handler);
    }

    /// Start the machine in `initial` and invoke its enter hook.
    ///
    /// Valid exactly once, on an uninitialized machine.
    pub fn start(&mut self, initial: S) -> Result<(), MachineError> {
        if self.current.is_some() {
            return Err(MachineError::AlreadyStarted);
        }
        if !self.handlers.contains_key(&initial) {
            return Err(MachineError::UnknownState {
                name: initial.name().to_string(),
            });
        }

        self.current = Some(initial.clone());
        debug!("machine started in state {}", initial.name());
        if let Some(handler) = self.handlers.get_mut(&initial) {
            handler.enter();
        }
        Ok(())
    }

    /// Invoke the current state's update hook. Call once per tick.
    pub fn update(&mut self) -> Result<(), MachineError> {
        let current = self.current.clone().ok_or(MachineError::NotStarted)?;
        match self.handlers.get_mut(&current) {
            Some(handler) => {
                handler.update();
                Ok(())
            }
            None => Err(MachineError::UnknownState {
                name: current.name().to_string(),
            }),
        }
    }

    /// Transition to `next`.
    ///
    /// Changing to the state the machine is already in is a no-op: no
    /// hooks run and no observers fire. Otherwise the old state's exit
    /// hook runs strictly before the new state's enter hook, then every
    /// observer is notified with `(previous, current)` in registration
    /// order. An unregistered `next` is rejected before anything is
    /// touched.
    pub fn change_state(&mut self, next: S) -> Result<(), MachineError> {
        let current = self.current.clone().ok_or(MachineError::NotStarted)?;
        if current == next {
            return Ok(());
        }
        if !self.handlers.contains_key(&next) {
            return Err(MachineError::UnknownState {
                name: next.name().to_string(),
            });
        }

        self.previous = Some(current.clone());
        self.current = Some(next.clone());

        if let Some(handler) = self.handlers.get_mut(&current) {
            handler.exit();
        }
        if let Some(handler) = self.handlers.get_mut(&next) {
            handler.enter();
        }

        debug!("state changed: {} -> {}", current.name(), next.name());
        for (_, observer) in self.observers.iter_mut() {
            observer(&current, &next);
        }
        Ok(())
    }

    /// Register a change observer, invoked with `(previous, current)`
    /// after every successful transition.
    pub fn on_state_changed<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&S, &S) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregister a change observer. Returns `false` if the handle was
    /// already removed.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Get the current state, if the machine has been started.
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Get the state before the last transition, if one has occurred.
    pub fn previous_state(&self) -> Option<&S> {
        self.previous.as_ref()
    }

    /// Check whether the machine has been started.
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Check whether a handler is registered for `id`.
    pub fn has_state(&self, id: &S) -> bool {
        self.handlers.contains_key(id)
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<S: StateId> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}
