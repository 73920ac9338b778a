//! Status bar.
//!
//! Displays the connection indicator, identity, and key hints.

use parlor_app::{App, ConnectionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection = match app.session().connection {
        ConnectionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Connected => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let identity = match (&app.session().username, &app.session().room) {
        (Some(username), Some(room)) => format!(" | {username} in #{room}"),
        _ => String::new(),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection,
        Span::styled(identity, Style::default().fg(Color::Gray)),
        Span::styled(" | Esc: leave", Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
