//! Session error taxonomy.

use thiserror::Error;

/// Validation failures for local user actions.
///
/// Recovered locally: the action is aborted, no state transition occurs,
/// and nothing reaches the network. The UI surfaces the message to the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Username was empty after trimming whitespace.
    #[error("please enter a username")]
    EmptyUsername,

    /// Room id was empty after trimming whitespace.
    #[error("please enter a room id")]
    EmptyRoom,
}
