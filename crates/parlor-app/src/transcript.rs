//! Transcript projection.
//!
//! Append-only projection of message and presence events into ordered
//! entries. `room_history` resets the transcript; everything after appends
//! in arrival order. Past entries are never mutated and arrival order is
//! authoritative (no reordering, no id dedup).

use chrono::{Local, TimeZone};
use parlor_proto::Message;

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    /// A user message.
    User {
        /// Sender's display name.
        username: String,
        /// Message body with markup-significant characters escaped.
        text: String,
        /// Unix timestamp in seconds.
        timestamp: f64,
        /// Whether the local user sent this message.
        own: bool,
    },

    /// A system notice, rendered without sender or time framing.
    System {
        /// Notice text.
        text: String,
    },
}

impl TranscriptEntry {
    /// Wall-clock `HH:MM` label. Empty for system entries.
    pub fn clock_label(&self) -> String {
        match self {
            Self::User { timestamp, .. } => format_clock(*timestamp),
            Self::System { .. } => String::new(),
        }
    }
}

/// Append-only transcript of the active room.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in arrival order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries (room left).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the transcript with a room's history, oldest first.
    pub fn reset(&mut self, messages: &[Message], local_user: Option<&str>) {
        self.entries.clear();
        for message in messages {
            self.push_message(message, local_user);
        }
    }

    /// Append one message in arrival order.
    pub fn push_message(&mut self, message: &Message, local_user: Option<&str>) {
        let entry = match message {
            Message::UserMessage { username, message, timestamp } => TranscriptEntry::User {
                username: username.clone(),
                text: escape_markup(message),
                timestamp: *timestamp,
                own: local_user == Some(username.as_str()),
            },
            Message::System { message, .. } => {
                TranscriptEntry::System { text: message.clone() }
            },
        };
        self.entries.push(entry);
    }

    /// Append a client-generated notice (presence changes).
    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::System { text: text.into() });
    }
}

/// Escape markup-significant characters in untrusted message text.
///
/// Message bodies originate from other clients; the projection guarantees
/// they are inert for any markup-based presentation layer consuming it.
pub fn escape_markup(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a Unix timestamp as local wall-clock `HH:MM`.
fn format_clock(timestamp: f64) -> String {
    Local
        .timestamp_opt(timestamp as i64, 0)
        .single()
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_message(username: &str, text: &str, timestamp: f64) -> Message {
        Message::UserMessage {
            username: username.into(),
            message: text.into(),
            timestamp,
        }
    }

    #[test]
    fn reset_replays_history_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_notice("stale");

        let history =
            [user_message("alice", "m1", 1.0), user_message("bob", "m2", 2.0)];
        transcript.reset(&history, Some("alice"));

        assert_eq!(transcript.len(), 2);
        assert!(matches!(
            transcript.entries(),
            [
                TranscriptEntry::User { own: true, .. },
                TranscriptEntry::User { own: false, .. },
            ]
        ));
    }

    #[test]
    fn push_preserves_arrival_order() {
        let mut transcript = Transcript::new();
        transcript.push_message(&user_message("alice", "first", 1.0), None);
        transcript.push_notice("bob joined the room");
        transcript.push_message(&user_message("bob", "second", 2.0), None);

        let texts: Vec<_> = transcript
            .entries()
            .iter()
            .map(|entry| match entry {
                TranscriptEntry::User { text, .. } | TranscriptEntry::System { text } => {
                    text.as_str()
                },
            })
            .collect();
        assert_eq!(texts, ["first", "bob joined the room", "second"]);
    }

    #[test]
    fn untrusted_bodies_are_escaped() {
        let mut transcript = Transcript::new();
        transcript
            .push_message(&user_message("mallory", "<script>alert(1)</script>", 1.0), None);

        let [TranscriptEntry::User { text, .. }] = transcript.entries() else {
            unreachable!("expected a single user entry");
        };
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
        assert_eq!(text, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn escape_covers_all_significant_characters() {
        assert_eq!(escape_markup(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
        assert_eq!(escape_markup("plain text"), "plain text");
    }

    #[test]
    fn system_notices_are_not_escaped() {
        let mut transcript = Transcript::new();
        transcript.push_notice("<server> maintenance");

        assert!(matches!(
            transcript.entries(),
            [TranscriptEntry::System { text }] if text == "<server> maintenance"
        ));
    }

    #[test]
    fn own_marking_follows_local_user() {
        let mut transcript = Transcript::new();
        transcript.push_message(&user_message("alice", "mine", 1.0), Some("alice"));
        transcript.push_message(&user_message("alice", "not mine", 1.0), Some("bob"));

        assert!(matches!(
            transcript.entries(),
            [
                TranscriptEntry::User { own: true, .. },
                TranscriptEntry::User { own: false, .. },
            ]
        ));
    }
}
