//! Terminal UI for parlor.
//!
//! A thin shell over the pure [`parlor_app::App`] state machine: crossterm
//! input, a websocket transport task, and ratatui rendering. All chat
//! logic lives in `parlor-app`; this crate only translates keys into
//! intents and state into widgets.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod transport;
pub mod ui;
pub mod view;

pub use parlor_app::{App, AppAction, AppEvent};
pub use runtime::{Runtime, RuntimeError};
pub use transport::{Connection, TransportError, TransportEvent};
pub use view::View;
