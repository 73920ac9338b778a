//! Outbound client commands.

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Outbound actions, client to server.
///
/// One variant per named event the client may emit. Payload-less events
/// serialize as a bare envelope with no `data` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Join a room under a chosen username.
    JoinRoom {
        /// Display name to appear as.
        username: String,
        /// Room to join.
        room_id: String,
    },

    /// Send a chat message to the joined room.
    SendMessage {
        /// Message body.
        message: String,
    },

    /// The local user started typing.
    TypingStart,

    /// The local user stopped typing.
    TypingStop,
}

impl ClientCommand {
    /// Encode the command to wire JSON.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Decode a command from its wire JSON.
    ///
    /// The client never receives these; this is for test harnesses
    /// speaking the server side of the protocol.
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(ProtocolError::Decode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn join_room_wire_shape() {
        let command =
            ClientCommand::JoinRoom { username: "alice".into(), room_id: "lobby".into() };

        let encoded: serde_json::Value =
            serde_json::from_str(&command.encode().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({"event": "join_room", "data": {"username": "alice", "room_id": "lobby"}})
        );
    }

    #[test]
    fn send_message_wire_shape() {
        let command = ClientCommand::SendMessage { message: "hello".into() };

        let encoded: serde_json::Value =
            serde_json::from_str(&command.encode().unwrap()).unwrap();
        assert_eq!(encoded, json!({"event": "send_message", "data": {"message": "hello"}}));
    }

    #[test]
    fn typing_events_have_no_payload() {
        let encoded: serde_json::Value =
            serde_json::from_str(&ClientCommand::TypingStart.encode().unwrap()).unwrap();
        assert_eq!(encoded, json!({"event": "typing_start"}));

        let encoded: serde_json::Value =
            serde_json::from_str(&ClientCommand::TypingStop.encode().unwrap()).unwrap();
        assert_eq!(encoded, json!({"event": "typing_stop"}));
    }

    #[test]
    fn decode_closes_the_loop() {
        let command = ClientCommand::SendMessage { message: "round".into() };
        let decoded = ClientCommand::decode(&command.encode().unwrap()).unwrap();
        assert_eq!(decoded, command);
    }
}
