//! Chat message payload.

use serde::{Deserialize, Serialize};

/// A chat message as carried by `room_history` and `new_message`.
///
/// The `type` field discriminates user messages from server-generated
/// system notices. Servers may attach extra fields (message ids and the
/// like); they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// A message typed by a user. The body is untrusted peer input.
    UserMessage {
        /// Sender's display name.
        username: String,
        /// Message body.
        message: String,
        /// Unix timestamp in seconds.
        timestamp: f64,
    },

    /// A server-generated notice, rendered without sender or time framing.
    System {
        /// Notice text.
        message: String,
        /// Unix timestamp in seconds.
        timestamp: f64,
    },
}

impl Message {
    /// Message body text.
    pub fn body(&self) -> &str {
        match self {
            Self::UserMessage { message, .. } | Self::System { message, .. } => message,
        }
    }

    /// Unix timestamp in seconds.
    pub fn timestamp(&self) -> f64 {
        match self {
            Self::UserMessage { timestamp, .. } | Self::System { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn user_message_wire_shape() {
        let message = Message::UserMessage {
            username: "alice".into(),
            message: "hello".into(),
            timestamp: 1700000000.5,
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "type": "user_message",
                "username": "alice",
                "message": "hello",
                "timestamp": 1700000000.5,
            })
        );
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let raw = json!({
            "type": "user_message",
            "id": "1700000000.123",
            "username": "bob",
            "message": "hi",
            "timestamp": 1700000000.0,
        });

        let message: Message = serde_json::from_value(raw).unwrap();
        assert_eq!(message.body(), "hi");
    }

    #[test]
    fn system_message_has_no_username() {
        let raw = json!({
            "type": "system",
            "message": "welcome",
            "timestamp": 1.0,
        });

        let message: Message = serde_json::from_value(raw).unwrap();
        assert!(matches!(message, Message::System { .. }));
    }
}
