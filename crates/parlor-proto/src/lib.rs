//! Wire protocol for parlor.
//!
//! The protocol is a set of named events carried as JSON text frames over a
//! persistent bidirectional connection. Each frame is an envelope
//! `{"event": <name>, "data": <payload>}`, with `data` omitted for
//! payload-less events.
//!
//! The event surface is closed: [`ServerEvent`] covers everything the
//! server may send, [`ClientCommand`] everything the client may send.
//! Dispatch over these unions is exhaustively checked at compile time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod error;
mod event;
mod message;

pub use command::ClientCommand;
pub use error::ProtocolError;
pub use event::ServerEvent;
pub use message::Message;
