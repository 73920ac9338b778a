//! Protocol error taxonomy.

use thiserror::Error;

/// Errors from wire encoding and decoding.
///
/// A decode failure on an inbound frame is a protocol violation by the
/// peer; callers log and drop the frame rather than crash.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Inbound JSON did not match any known event shape.
    #[error("malformed inbound event: {0}")]
    Decode(#[source] serde_json::Error),

    /// An outbound command could not be serialized.
    #[error("failed to encode outbound command: {0}")]
    Encode(#[source] serde_json::Error),
}
