//! Inbound server events.

use serde::{Deserialize, Serialize};

use crate::{Message, ProtocolError};

/// Inbound events, server to client.
///
/// One variant per named event the server may emit. Connection lifecycle
/// (connect, disconnect) is a transport-level signal, not an event frame,
/// and is surfaced to the application separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Replay of the room's recent messages plus the current roster, sent
    /// once after a successful join.
    RoomHistory {
        /// Messages in room order, oldest first.
        messages: Vec<Message>,
        /// Usernames currently present.
        active_users: Vec<String>,
    },

    /// A message broadcast to the room.
    NewMessage(Message),

    /// A user joined the room; carries the updated roster.
    UserJoined {
        /// Who joined.
        username: String,
        /// Usernames currently present.
        active_users: Vec<String>,
    },

    /// A user left the room; carries the updated roster.
    UserLeft {
        /// Who left.
        username: String,
        /// Usernames currently present.
        active_users: Vec<String>,
    },

    /// A user started or stopped typing.
    UserTyping {
        /// Whose typing state changed.
        username: String,
        /// Whether the user is currently typing.
        is_typing: bool,
    },
}

impl ServerEvent {
    /// Decode an event from its wire JSON.
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(ProtocolError::Decode)
    }

    /// Encode the event to wire JSON.
    ///
    /// The client never sends these; this is for test harnesses speaking
    /// the server side of the protocol.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}
