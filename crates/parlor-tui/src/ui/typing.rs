//! Remote typing notice.
//!
//! A single line under the transcript showing who is typing, driven by the
//! most recent `user_typing` event.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the typing notice line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(username) = app.remote_typing() else {
        return;
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {username} is typing..."),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(paragraph, area);
}
