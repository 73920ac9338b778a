//! View state and key handling.
//!
//! Owns what the core deliberately does not: the login form, the message
//! composer, and the mapping from terminal keys to [`App`] intents. The
//! screen shown is derived from the app state, not stored.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parlor_app::{App, AppAction};

/// A single-line text field with a cursor.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    buffer: String,
    cursor: usize,
}

impl InputField {
    /// Field contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in display columns.
    pub fn cursor(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Replace the contents, placing the cursor at the end.
    pub fn set(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move the cursor one character left.
    pub fn left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move the cursor one character right.
    pub fn right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Move the cursor to the start of the field.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the field.
    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.buffer.clear();
    }
}

/// Which login field has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginFocus {
    /// The username field.
    #[default]
    Username,
    /// The room id field.
    Room,
}

/// Screen shown by the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login form.
    Login,
    /// Chat transcript and roster.
    Chat,
}

/// UI-local editing state: login form, composer, focus, error line.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// Login form username field.
    pub username: InputField,
    /// Login form room id field.
    pub room: InputField,
    /// Focused login field.
    pub focus: LoginFocus,
    /// Validation or transport error shown under the login form.
    pub login_error: Option<String>,
    /// Message composer.
    pub composer: InputField,
}

impl View {
    /// Create a view, optionally prefilled from the command line.
    pub fn new(username: Option<String>, room: Option<String>) -> Self {
        let mut view = Self::default();
        if let Some(username) = username {
            view.username.set(username);
        }
        if let Some(room) = room {
            view.room.set(room);
        }
        view
    }

    /// Screen to show: chat once the join command has been dispatched.
    pub fn screen(&self, app: &App) -> Screen {
        if app.in_room() { Screen::Chat } else { Screen::Login }
    }

    /// Translate a key press into app intents.
    pub fn handle_key(&mut self, key: KeyEvent, app: &mut App, now: Instant) -> Vec<AppAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return app.quit();
        }

        match self.screen(app) {
            Screen::Login => self.handle_login_key(key.code, app),
            Screen::Chat => self.handle_chat_key(key.code, app, now),
        }
    }

    fn handle_login_key(&mut self, code: KeyCode, app: &mut App) -> Vec<AppAction> {
        match code {
            KeyCode::Esc => app.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    LoginFocus::Username => LoginFocus::Room,
                    LoginFocus::Room => LoginFocus::Username,
                };
                vec![AppAction::Render]
            },
            KeyCode::Enter => {
                if app.join_in_flight() {
                    // A connection attempt is already running.
                    return vec![];
                }
                match app.start_join(self.username.buffer(), self.room.buffer()) {
                    Ok(actions) => {
                        self.login_error = None;
                        actions
                    },
                    Err(e) => {
                        self.login_error = Some(e.to_string());
                        vec![AppAction::Render]
                    },
                }
            },
            KeyCode::Char(c) => {
                self.focused_field_mut().insert(c);
                vec![AppAction::Render]
            },
            KeyCode::Backspace => {
                self.focused_field_mut().backspace();
                vec![AppAction::Render]
            },
            KeyCode::Delete => {
                self.focused_field_mut().delete();
                vec![AppAction::Render]
            },
            KeyCode::Left => {
                self.focused_field_mut().left();
                vec![AppAction::Render]
            },
            KeyCode::Right => {
                self.focused_field_mut().right();
                vec![AppAction::Render]
            },
            KeyCode::Home => {
                self.focused_field_mut().home();
                vec![AppAction::Render]
            },
            KeyCode::End => {
                self.focused_field_mut().end();
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn handle_chat_key(&mut self, code: KeyCode, app: &mut App, now: Instant) -> Vec<AppAction> {
        match code {
            KeyCode::Esc => {
                // Back to the login screen; the username is re-entered on
                // each visit, the room is kept for convenience.
                self.composer.clear();
                self.username.clear();
                self.focus = LoginFocus::Username;
                app.leave()
            },
            KeyCode::Enter => {
                let actions = app.send(self.composer.buffer());
                if actions.is_empty() {
                    // Not sent (blank or disconnected); keep the draft.
                    return vec![];
                }
                self.composer.clear();
                actions
            },
            KeyCode::Char(c) => {
                self.composer.insert(c);
                self.with_composer_activity(app, now)
            },
            KeyCode::Backspace => {
                self.composer.backspace();
                self.with_composer_activity(app, now)
            },
            KeyCode::Delete => {
                self.composer.delete();
                self.with_composer_activity(app, now)
            },
            KeyCode::Left => {
                self.composer.left();
                vec![AppAction::Render]
            },
            KeyCode::Right => {
                self.composer.right();
                vec![AppAction::Render]
            },
            KeyCode::Home => {
                self.composer.home();
                vec![AppAction::Render]
            },
            KeyCode::End => {
                self.composer.end();
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn with_composer_activity(&mut self, app: &mut App, now: Instant) -> Vec<AppAction> {
        let mut actions = app.composer_activity(now);
        actions.push(AppAction::Render);
        actions
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            LoginFocus::Username => &mut self.username,
            LoginFocus::Room => &mut self.room,
        }
    }
}

#[cfg(test)]
mod tests {
    use parlor_app::{AppEvent, ConnectionState};
    use parlor_proto::ClientCommand;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut View, app: &mut App, text: &str) {
        for c in text.chars() {
            let _ = view.handle_key(key(KeyCode::Char(c)), app, Instant::now());
        }
    }

    #[test]
    fn input_field_edits_at_the_cursor() {
        let mut field = InputField::default();
        field.insert('a');
        field.insert('c');
        field.left();
        field.insert('b');
        assert_eq!(field.buffer(), "abc");

        field.backspace();
        assert_eq!(field.buffer(), "ac");

        field.home();
        field.delete();
        assert_eq!(field.buffer(), "c");
    }

    #[test]
    fn login_enter_with_blank_form_shows_validation_error() {
        let mut view = View::default();
        let mut app = App::new();

        let actions = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        assert_eq!(actions, [AppAction::Render]);
        assert!(view.login_error.is_some());
        assert_eq!(app.session().connection, ConnectionState::Disconnected);
    }

    #[test]
    fn login_enter_starts_the_join() {
        let mut view = View::default();
        let mut app = App::new();

        type_text(&mut view, &mut app, "alice");
        let _ = view.handle_key(key(KeyCode::Tab), &mut app, Instant::now());
        type_text(&mut view, &mut app, "lobby");

        let actions = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        assert!(actions.contains(&AppAction::OpenConnection));
        assert!(view.login_error.is_none());

        // A second Enter while the attempt is in flight does nothing.
        let actions = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        assert!(actions.is_empty());
    }

    #[test]
    fn chat_enter_sends_and_clears_the_composer() {
        let mut view = View::default();
        let mut app = App::new();
        view.username.set("alice".into());
        view.room.set("lobby".into());
        let _ = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        let _ = app.handle(AppEvent::Connected);
        assert_eq!(view.screen(&app), Screen::Chat);

        type_text(&mut view, &mut app, "hi");
        let actions = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        assert!(actions.contains(&AppAction::Send(ClientCommand::SendMessage {
            message: "hi".into()
        })));
        assert_eq!(view.composer.buffer(), "");
    }

    #[test]
    fn chat_enter_keeps_the_draft_when_disconnected() {
        let mut view = View::default();
        let mut app = App::new();
        view.username.set("alice".into());
        view.room.set("lobby".into());
        let _ = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        let _ = app.handle(AppEvent::Connected);
        type_text(&mut view, &mut app, "draft");

        let _ = app.handle(AppEvent::Disconnected);
        let actions = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        assert!(actions.is_empty());
        assert_eq!(view.composer.buffer(), "draft");
    }

    #[test]
    fn chat_esc_leaves_and_clears_the_username() {
        let mut view = View::default();
        let mut app = App::new();
        view.username.set("alice".into());
        view.room.set("lobby".into());
        let _ = view.handle_key(key(KeyCode::Enter), &mut app, Instant::now());
        let _ = app.handle(AppEvent::Connected);

        let actions = view.handle_key(key(KeyCode::Esc), &mut app, Instant::now());
        assert!(actions.contains(&AppAction::CloseConnection));
        assert_eq!(view.screen(&app), Screen::Login);
        assert_eq!(view.username.buffer(), "");
        assert_eq!(view.room.buffer(), "lobby");
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut view = View::default();
        let mut app = App::new();

        let actions = view.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            Instant::now(),
        );
        assert_eq!(actions, [AppAction::Quit]);
    }
}
