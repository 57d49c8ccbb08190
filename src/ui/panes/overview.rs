//! Overview pane: what the registry currently holds
//!
//! Societies and events are listed newest first, the same order the
//! choice dialogs offer them in.

use super::utils::border_style;
use crate::registry::Registry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render counts plus the society and event lists
pub fn render_overview_pane(frame: &mut Frame, area: Rect, registry: &Registry) {
    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(inner);

    let counts = Line::from(vec![
        Span::styled(" Feedback: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            registry.feedback_count().to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("Notifications: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            registry.notification_count().to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(counts), rows[0]);

    render_name_list(
        frame,
        rows[1],
        "Societies",
        &registry.society_names(),
        DEFAULT_THEME.society,
    );
    render_name_list(
        frame,
        rows[2],
        "Events",
        &registry.event_names(),
        DEFAULT_THEME.event,
    );
}

fn render_name_list(frame: &mut Frame, area: Rect, title: &str, names: &[String], color: Color) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ({}) ", title, names.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    if names.is_empty() {
        let paragraph = Paragraph::new("(none)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Drop whatever does not fit; the newest entries stay visible
    let visible_height = area.height.saturating_sub(1).max(1) as usize;
    let mut items: Vec<ListItem> = names
        .iter()
        .take(visible_height)
        .map(|name| ListItem::new(name.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    if names.len() > visible_height {
        if let Some(last) = items.last_mut() {
            *last = ListItem::new(format!("… {} more", names.len() - visible_height + 1))
                .style(Style::default().fg(DEFAULT_THEME.comment));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}
