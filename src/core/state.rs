//! Core StateId trait for machine state identifiers.
//!
//! Every state machine is keyed by a caller-supplied identifier type,
//! usually a plain enum. This trait captures the bounds the machine
//! needs from that type.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// Identifiers are small, comparable values that name one state of a
/// machine. They are used as map keys internally and in diagnostics,
/// so they must be cheap to clone and stable under comparison.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into current/previous tracking
/// - `Eq` + `Hash`: identifiers are map keys and are compared on every
///   transition
/// - `Debug`: identifiers appear in error values and log lines
///
/// The [`state_id!`](crate::state_id) macro generates the derives and the
/// `name()` implementation for plain enums.
///
/// # Example
///
/// ```rust
/// use framestate::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Mob {
///     Idle,
///     Patrol,
///     Chase,
/// }
///
/// impl StateId for Mob {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Patrol => "Patrol",
///             Self::Chase => "Chase",
///         }
///     }
/// }
/// ```
pub trait StateId: Clone + Eq + Hash + Debug {
    /// Get the identifier's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
