//! Operation trait for the inputs that drive transitions.

use std::fmt::Debug;

/// An input accepted by a state machine, e.g. `login` or `move_up`.
///
/// Operations are plain copyable tags; the transition table decides what
/// each one does in each state.
pub trait Operation: Copy + PartialEq + Debug + Send + Sync {
    /// Stable name used in history records and logs.
    fn name(&self) -> &'static str;
}
