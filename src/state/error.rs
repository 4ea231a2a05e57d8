//! Error types for state machine operations.

use thiserror::Error;

/// Precondition violations when driving the state machine.
///
/// These are programming errors: the host treats them as fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMachineError {
    /// A transition was requested before a current state was set
    #[error("state machine has no current state")]
    Uninitialized,

    /// `revert_to_previous_state` was called before any transition
    #[error("no previous state to revert to")]
    NoPreviousState,
}

/// Result type alias for state machine operations
pub type StateMachineResult<T> = Result<T, StateMachineError>;
