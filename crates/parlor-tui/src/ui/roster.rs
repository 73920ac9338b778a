//! Roster sidebar.
//!
//! Displays the users present in the room, replaced wholesale on every
//! presence event, with the local user annotated.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the roster sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.roster().count();
    let title = format!(" {count} online ");

    let local_user = app.session().username.as_deref();
    let items: Vec<ListItem> = app
        .roster()
        .users()
        .iter()
        .map(|username| {
            let is_local = Some(username.as_str()) == local_user;
            let (label, style) = if is_local {
                (
                    format!("{username} (you)"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                (username.clone(), Style::default())
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
