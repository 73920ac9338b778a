//! Observable session state types.
//!
//! [`Session`] is the client's single mutable identity record, owned by
//! the [`crate::App`] state machine and read by the renderers. It is
//! created empty at startup and never persisted.

/// Connection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to the server.
    #[default]
    Disconnected,
    /// Connection in progress.
    Connecting,
    /// Connection established.
    Connected,
}

/// The client's current identity, room, and connection.
///
/// Exactly one per client instance; mutated in place by the session
/// controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Username chosen at login. `None` before a join attempt.
    pub username: Option<String>,
    /// Room joined or being joined. `None` before a join attempt.
    pub room: Option<String>,
    /// Connection lifecycle state.
    pub connection: ConnectionState,
    /// Whether the local user is currently marked as typing.
    pub is_typing: bool,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the connection is established.
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }

    /// Reset all fields to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.username, None);
        assert_eq!(session.room, None);
        assert_eq!(session.connection, ConnectionState::Disconnected);
        assert!(!session.is_typing);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = Session::new();
        session.username = Some("alice".into());
        session.room = Some("lobby".into());
        session.connection = ConnectionState::Connected;
        session.is_typing = true;

        session.reset();
        assert_eq!(session, Session::new());
    }
}
