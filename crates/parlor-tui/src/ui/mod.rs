//! UI rendering.
//!
//! Functions that project App and View state into ratatui widgets. All
//! functions are pure (no I/O), taking state and drawing into the frame.

mod chat;
mod composer;
mod login;
mod roster;
mod status;
mod typing;

use parlor_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::view::{Screen, View};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, view: &View) {
    match view.screen(app) {
        Screen::Login => login::render(frame, app, view),
        Screen::Chat => render_chat_screen(frame, app, view),
    }
}

/// Render the chat screen (transcript + roster + typing + composer + status).
fn render_chat_screen(frame: &mut Frame, app: &App, view: &View) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const TYPING_HEIGHT: u16 = 1;
    const COMPOSER_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(TYPING_HEIGHT),
            Constraint::Length(COMPOSER_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [main_area, typing_area, composer_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, *main_area);
    typing::render(frame, app, *typing_area);
    composer::render(frame, view, *composer_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (transcript + roster sidebar).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const ROSTER_SIDEBAR_WIDTH: u16 = 20;
    const CHAT_AREA_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(CHAT_AREA_MIN_WIDTH),
            Constraint::Length(ROSTER_SIDEBAR_WIDTH),
        ])
        .split(area);

    let [chat_area, roster_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, *chat_area);
    roster::render(frame, app, *roster_area);
}
