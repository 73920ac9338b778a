//! Async runtime.
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine, the websocket transport, and the renderer. Uses
//! tokio::select! to handle terminal events, server events, and the
//! debounce tick concurrently; each handler runs to completion before the
//! next is dispatched, so App state needs no locking.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use parlor_app::{App, AppAction, AppEvent};
use parlor_proto::ClientCommand;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{
    transport::{self, Connection, TransportEvent},
    ui,
    view::View,
};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown, the main event loop, and execution of
/// the actions produced by the App state machine. Transport failures are
/// surfaced to the app as `Disconnected`, never treated as fatal.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    view: View,
    connection: Option<Connection>,
    server_url: String,
}

impl Runtime {
    /// Create a runtime that connects to the given server URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new(
        server_url: String,
        username: Option<String>,
        room: Option<String>,
    ) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(),
            view: View::new(username, room),
            connection: None,
            server_url,
        })
    }

    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error on terminal I/O failure.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

        loop {
            let should_quit = if let Some(ref mut conn) = self.connection {
                tokio::select! {
                    maybe_event = event_stream.next() => {
                        match maybe_event {
                            Some(Ok(event)) => self.handle_terminal_event(event).await?,
                            Some(Err(e)) => return Err(RuntimeError::Io(e)),
                            None => true,
                        }
                    }

                    transport_event = conn.from_server.recv() => {
                        let app_event = match transport_event {
                            Some(TransportEvent::Event(event)) => AppEvent::Server(event),
                            Some(TransportEvent::Closed) | None => {
                                self.connection = None;
                                AppEvent::Disconnected
                            },
                        };
                        let actions = self.app.handle(app_event);
                        self.process_actions(actions).await?
                    }

                    _ = tick_interval.tick() => {
                        let actions = self.app.handle(AppEvent::Tick { now: Instant::now() });
                        self.process_actions(actions).await?
                    }
                }
            } else {
                tokio::select! {
                    maybe_event = event_stream.next() => {
                        match maybe_event {
                            Some(Ok(event)) => self.handle_terminal_event(event).await?,
                            Some(Err(e)) => return Err(RuntimeError::Io(e)),
                            None => true,
                        }
                    }

                    _ = tick_interval.tick() => {
                        let actions = self.app.handle(AppEvent::Tick { now: Instant::now() });
                        self.process_actions(actions).await?
                    }
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    async fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let actions = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.view.handle_key(key, &mut self.app, Instant::now())
            },
            Event::Resize(_, _) => vec![AppAction::Render],
            _ => return Ok(false),
        };
        self.process_actions(actions).await
    }

    /// Execute actions produced by the app. Returns true if should quit.
    ///
    /// Uses iterative processing: actions that feed events back into the
    /// app (connection acknowledgments) extend the pending queue instead
    /// of recursing.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        let mut pending = initial_actions;

        while !pending.is_empty() {
            let actions = std::mem::take(&mut pending);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),
                    AppAction::OpenConnection => {
                        let follow_up = self.open_connection().await;
                        pending.extend(follow_up);
                    },
                    AppAction::CloseConnection => self.close_connection(),
                    AppAction::Send(command) => self.send_command(command).await,
                }
            }
        }
        Ok(false)
    }

    /// Connect to the server and feed the acknowledgment back to the app.
    async fn open_connection(&mut self) -> Vec<AppAction> {
        match transport::connect(&self.server_url).await {
            Ok(connection) => {
                self.connection = Some(connection);
                self.app.handle(AppEvent::Connected)
            },
            Err(e) => {
                tracing::warn!(error = %e, "connection failed");
                self.view.login_error = Some(e.to_string());
                self.app.handle(AppEvent::Disconnected)
            },
        }
    }

    /// Drop the connection, stopping its I/O task.
    fn close_connection(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.stop();
        }
    }

    /// Hand a command to the transport task.
    async fn send_command(&mut self, command: ClientCommand) {
        let Some(conn) = &self.connection else {
            tracing::warn!(?command, "dropping command with no open connection");
            return;
        };
        if conn.to_server.send(command).await.is_err() {
            tracing::warn!("connection task gone, dropping command");
        }
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app, &self.view);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(ref conn) = self.connection {
            conn.stop();
        }

        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
