//! Application side-effects and intents.
//!
//! [`AppAction`] is the set of instructions the [`crate::App`] state
//! machine produces for the runtime to execute.

use parlor_proto::ClientCommand;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Open a connection to the server.
    OpenConnection,

    /// Close the connection if one is open.
    CloseConnection,

    /// Send a command to the server.
    Send(ClientCommand),
}
