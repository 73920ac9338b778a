//! Transcript pane.
//!
//! Displays the active room's transcript, newest entries pinned to the
//! bottom so every append keeps the latest entry visible.

use parlor_app::{App, TranscriptEntry};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BORDER_SIZE: u16 = 2;

/// Render the transcript pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = app
        .session()
        .room
        .as_deref()
        .map_or_else(|| " Chat ".to_string(), |room| format!(" #{room} "));

    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = app.transcript().entries().iter().map(entry_item).collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}

fn entry_item(entry: &TranscriptEntry) -> ListItem<'static> {
    match entry {
        TranscriptEntry::User { username, text, own, .. } => {
            let sender_style = if *own {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.clock_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("<{username}>"), sender_style),
                Span::raw(" "),
                Span::raw(text.clone()),
            ]))
        },
        TranscriptEntry::System { text } => ListItem::new(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))),
    }
}
