//! Menu pane: the actions available on the current screen

use super::utils::border_style;
use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the menu for `screen` with the cursor on row `selected`
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    screen: Screen,
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(screen.title())
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 1, 0));

    let items: Vec<ListItem> = screen
        .actions()
        .iter()
        .enumerate()
        .map(|(row, action)| {
            if row == selected {
                ListItem::new(Line::from(vec![
                    Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Span::styled(
                        action.label(),
                        Style::default()
                            .fg(DEFAULT_THEME.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
                .style(Style::default().bg(DEFAULT_THEME.selection_bg))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(action.label(), Style::default().fg(DEFAULT_THEME.fg)),
                ]))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
