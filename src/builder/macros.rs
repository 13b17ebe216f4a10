//! Macros for ergonomic state machine construction.

/// Generate a StateId implementation for simple enums.
///
/// # Example
///
/// ```
/// use framestate::state_id;
///
/// state_id! {
///     pub enum GuardState {
///         Idle,
///         Patrol,
///         Chase,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
