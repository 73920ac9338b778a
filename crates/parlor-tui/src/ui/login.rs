//! Login screen.
//!
//! Centered form with username and room fields, a validation/transport
//! error line, and the connection badge while a join attempt is in flight.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::view::{LoginFocus, View};

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 9;

// "> " marker plus a fixed-width label, so both fields line up.
const FIELD_PREFIX_WIDTH: u16 = 12;
const USERNAME_ROW: u16 = 1;
const ROOM_ROW: u16 = 3;

/// Render the login screen.
pub fn render(frame: &mut Frame, app: &App, view: &View) {
    let area = centered(frame.area(), FORM_WIDTH, FORM_HEIGHT);
    let block = Block::default().borders(Borders::ALL).title(" parlor ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        field_line(view, LoginFocus::Username, "Username: ", view.username.buffer()),
        Line::from(""),
        field_line(view, LoginFocus::Room, "Room id:  ", view.room.buffer()),
        Line::from(""),
        notice_line(app, view),
        Line::from(Span::styled(
            " Enter: join | Tab: switch field | Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);

    let (field, row) = match view.focus {
        LoginFocus::Username => (&view.username, USERNAME_ROW),
        LoginFocus::Room => (&view.room, ROOM_ROW),
    };
    let cursor_x = inner
        .x
        .saturating_add(FIELD_PREFIX_WIDTH)
        .saturating_add(field.cursor() as u16)
        .min(inner.x.saturating_add(inner.width.saturating_sub(1)));
    frame.set_cursor_position((cursor_x, inner.y.saturating_add(row)));
}

fn field_line<'a>(view: &View, field: LoginFocus, label: &'a str, value: &'a str) -> Line<'a> {
    let focused = view.focus == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(label, label_style),
        Span::raw(value),
    ])
}

fn notice_line<'a>(app: &App, view: &'a View) -> Line<'a> {
    if let Some(error) = &view.login_error {
        return Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    if app.join_in_flight() {
        return Line::from(Span::styled(
            " Connecting...",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from("")
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
