//! Per-state callback bundle.

use super::state::StateId;
use std::fmt;

/// Type alias for a state lifecycle hook.
///
/// Hooks take no arguments and are invoked synchronously on the calling
/// thread. They are `FnMut` so they can mutate captured game data, and
/// they carry no `Send`/`Sync` bounds; the machine is single-threaded.
pub type Hook = Box<dyn FnMut()>;

/// The bundle of callbacks registered for one state.
///
/// Each slot is optional; an absent hook is a no-op. Handlers are built
/// once, handed to the machine, and owned by its internal map for the
/// machine's lifetime.
pub struct StateHandler<S: StateId> {
    id: S,
    on_enter: Option<Hook>,
    on_update: Option<Hook>,
    on_exit: Option<Hook>,
}

impl<S: StateId> StateHandler<S> {
    pub(crate) fn from_parts(
        id: S,
        on_enter: Option<Hook>,
        on_update: Option<Hook>,
        on_exit: Option<Hook>,
    ) -> Self {
        Self {
            id,
            on_enter,
            on_update,
            on_exit,
        }
    }

    /// The identifier this handler is registered under.
    pub fn id(&self) -> &S {
        &self.id
    }

    pub(crate) fn enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    pub(crate) fn update(&mut self) {
        if let Some(hook) = self.on_update.as_mut() {
            hook();
        }
    }

    pub(crate) fn exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }
}

impl<S: StateId> fmt::Debug for StateHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandler")
            .field("id", &self.id)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
