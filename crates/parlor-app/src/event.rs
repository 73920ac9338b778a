//! Application input events.
//!
//! [`AppEvent`] is the full set of inputs that drive the [`crate::App`]
//! state machine. Events originate from the transport (connection
//! lifecycle, decoded server events) and from the runtime's periodic tick;
//! local user intents are separate methods on the app.

use std::time::Instant;

use parlor_proto::ServerEvent;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Connection to the server established.
    Connected,

    /// Connection lost or closed.
    Disconnected,

    /// Periodic tick driving the typing quiet-period deadline.
    Tick {
        /// Current time from the runtime.
        now: Instant,
    },

    /// Decoded inbound event from the server.
    Server(ServerEvent),
}
