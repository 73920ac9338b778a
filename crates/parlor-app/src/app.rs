//! Session state machine.
//!
//! [`App`] is a pure state machine: it consumes local user intents and
//! [`AppEvent`]s and produces [`AppAction`]s for the runtime to execute.
//! It owns the [`Session`], the typing debouncer, and the transcript and
//! roster projections. No I/O dependencies, fully testable in isolation.

use std::time::Instant;

use parlor_proto::{ClientCommand, ServerEvent};

use crate::{
    AppAction, AppEvent, ConnectionState, Roster, Session, SessionError, Transcript,
    TypingDebouncer,
};

/// Join request lifecycle.
///
/// INVARIANT: the join command is emitted exactly once per login attempt.
/// `Sent` blocks re-emission on later connect acknowledgments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum JoinPhase {
    /// No join attempt in progress.
    #[default]
    Idle,
    /// Join requested, waiting for the connect acknowledgment.
    Pending,
    /// Join command emitted.
    Sent,
}

/// Session state machine.
///
/// Processes intents and events, produces actions. The runtime executes
/// the actions; the renderers read the projections.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Identity, room, connection, local typing flag.
    session: Session,
    /// Join request lifecycle for the current attempt.
    join_phase: JoinPhase,
    /// Quiet-period deadline for the typing indication.
    debouncer: TypingDebouncer,
    /// Transcript projection for the active room.
    transcript: Transcript,
    /// Roster projection for the active room.
    roster: Roster,
    /// Who the most recent remote typing notice names. `None` when idle.
    remote_typing: Option<String>,
}

impl App {
    /// Create an app with an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a login attempt with the given username and room id.
    ///
    /// Inputs are trimmed; empty values fail validation and perform no
    /// transition. On success the identity is stored and the join command
    /// is emitted exactly once: immediately when the connection is already
    /// open, otherwise deferred to the connect acknowledgment.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyUsername`] or [`SessionError::EmptyRoom`] when
    /// the trimmed input is empty.
    pub fn start_join(
        &mut self,
        username: &str,
        room_id: &str,
    ) -> Result<Vec<AppAction>, SessionError> {
        let username = username.trim();
        let room_id = room_id.trim();
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        if room_id.is_empty() {
            return Err(SessionError::EmptyRoom);
        }

        self.session.username = Some(username.to_string());
        self.session.room = Some(room_id.to_string());

        if self.session.is_connected() {
            self.join_phase = JoinPhase::Sent;
            return Ok(vec![Self::join_command(username, room_id), AppAction::Render]);
        }

        self.session.connection = ConnectionState::Connecting;
        self.join_phase = JoinPhase::Pending;
        Ok(vec![AppAction::OpenConnection, AppAction::Render])
    }

    /// Leave the room and reset the session.
    ///
    /// Idempotent: safe to call with no active session; a second call is a
    /// no-op beyond ensuring cleared state.
    pub fn leave(&mut self) -> Vec<AppAction> {
        self.session.reset();
        self.join_phase = JoinPhase::Idle;
        self.debouncer.cancel();
        self.transcript.clear();
        self.roster.clear();
        self.remote_typing = None;
        vec![AppAction::CloseConnection, AppAction::Render]
    }

    /// Send a chat message.
    ///
    /// No-op when the trimmed text is empty or the session is not
    /// connected. Sending implicitly ends the typing indication so a stale
    /// "is typing" cannot outlive the message itself.
    pub fn send(&mut self, text: &str) -> Vec<AppAction> {
        let text = text.trim();
        if text.is_empty() || !self.session.is_connected() {
            return vec![];
        }

        let mut actions =
            vec![AppAction::Send(ClientCommand::SendMessage { message: text.to_string() })];
        if self.session.is_typing {
            self.session.is_typing = false;
            self.debouncer.cancel();
            actions.push(AppAction::Send(ClientCommand::TypingStop));
        }
        actions.push(AppAction::Render);
        actions
    }

    /// Record composer keystroke activity at `now`.
    ///
    /// Edge-triggered: the first keystroke of a burst emits `typing_start`;
    /// every keystroke re-arms the quiet-period deadline.
    pub fn composer_activity(&mut self, now: Instant) -> Vec<AppAction> {
        if !self.session.is_connected() {
            return vec![];
        }

        self.debouncer.rearm(now);
        if self.session.is_typing {
            return vec![];
        }
        self.session.is_typing = true;
        vec![AppAction::Send(ClientCommand::TypingStart)]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Connected => self.on_connected(),
            AppEvent::Disconnected => self.on_disconnected(),
            AppEvent::Tick { now } => self.on_tick(now),
            AppEvent::Server(event) => self.on_server_event(event),
        }
    }

    fn on_connected(&mut self) -> Vec<AppAction> {
        self.session.connection = ConnectionState::Connected;

        if self.join_phase == JoinPhase::Pending
            && let (Some(username), Some(room_id)) = (&self.session.username, &self.session.room)
        {
            let join = Self::join_command(username, room_id);
            self.join_phase = JoinPhase::Sent;
            return vec![join, AppAction::Render];
        }
        vec![AppAction::Render]
    }

    fn on_disconnected(&mut self) -> Vec<AppAction> {
        self.session.connection = ConnectionState::Disconnected;
        self.session.is_typing = false;
        self.debouncer.cancel();
        self.remote_typing = None;
        if self.join_phase == JoinPhase::Pending {
            // The attempt died before the join was sent; let the user retry.
            self.join_phase = JoinPhase::Idle;
        }
        vec![AppAction::Render]
    }

    fn on_tick(&mut self, now: Instant) -> Vec<AppAction> {
        if self.debouncer.poll(now) && self.session.is_typing {
            self.session.is_typing = false;
            if self.session.is_connected() {
                return vec![AppAction::Send(ClientCommand::TypingStop)];
            }
        }
        vec![]
    }

    fn on_server_event(&mut self, event: ServerEvent) -> Vec<AppAction> {
        if !self.session.is_connected() || self.session.room.is_none() {
            tracing::warn!(?event, "dropping server event outside an active session");
            return vec![];
        }

        let local_user = self.session.username.clone();
        let local_user = local_user.as_deref();
        match event {
            ServerEvent::RoomHistory { messages, active_users } => {
                self.transcript.reset(&messages, local_user);
                self.roster.replace(active_users);
            },
            ServerEvent::NewMessage(message) => {
                self.transcript.push_message(&message, local_user);
            },
            ServerEvent::UserJoined { username, active_users } => {
                self.transcript.push_notice(format!("{username} joined the room"));
                self.roster.replace(active_users);
            },
            ServerEvent::UserLeft { username, active_users } => {
                self.transcript.push_notice(format!("{username} left the room"));
                self.roster.replace(active_users);
            },
            ServerEvent::UserTyping { username, is_typing } => {
                self.remote_typing = is_typing.then_some(username);
            },
        }
        vec![AppAction::Render]
    }

    fn join_command(username: &str, room_id: &str) -> AppAction {
        AppAction::Send(ClientCommand::JoinRoom {
            username: username.to_string(),
            room_id: room_id.to_string(),
        })
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Transcript projection for the active room.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Roster projection for the active room.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Username named by the most recent remote typing notice.
    pub fn remote_typing(&self) -> Option<&str> {
        self.remote_typing.as_deref()
    }

    /// Whether the join command has been emitted for the current attempt.
    pub fn in_room(&self) -> bool {
        self.join_phase == JoinPhase::Sent
    }

    /// Whether a join attempt is waiting on the connect acknowledgment.
    pub fn join_in_flight(&self) -> bool {
        self.join_phase == JoinPhase::Pending
    }
}
