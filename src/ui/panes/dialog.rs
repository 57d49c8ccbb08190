//! Modal dialogs drawn over the menu and overview panes
//!
//! Text never wraps. Lines wider than the box are cut with an ellipsis, and
//! message bodies taller than the area scroll under the hint line.

use std::borrow::Cow;

use super::report::render_report_chart;
use super::utils::{border_style, centered_rect, truncate_text};
use crate::report::ReportCounter;
use crate::ui::app::{Dialog, MessageKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Border plus vertical padding rows around a box's lines
const BOX_CHROME_ROWS: u16 = 4;
/// Border plus horizontal padding columns
const BOX_CHROME_COLS: u16 = 6;
/// Blank spacer and key hint under a scrolling body
const HINT_ROWS: u16 = 2;

/// Render `dialog` centered in `area`
///
/// Scroll offsets inside `dialog` are clamped to its content here.
pub fn render_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &mut Dialog,
    report: &ReportCounter,
) {
    match dialog {
        Dialog::Input {
            title,
            prompt,
            buffer,
            masked,
            ..
        } => {
            let shown = if *masked {
                "•".repeat(buffer.chars().count())
            } else {
                buffer.clone()
            };
            // Leave room for the "> " prefix and the cursor block
            let room = inner_width(area, 60).saturating_sub(3);
            let skip = shown.chars().count().saturating_sub(room);
            let shown: String = shown.chars().skip(skip).collect();
            let lines = vec![
                Line::styled(
                    truncate_text(prompt, inner_width(area, 60)),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Line::from(""),
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Span::styled(shown, Style::default().fg(DEFAULT_THEME.primary)),
                    Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)),
                ]),
                Line::from(""),
                hint_line("↵ ok  esc cancel"),
            ];
            render_box(frame, area, title, lines, 60);
        }
        Dialog::Choice {
            title,
            options,
            selected,
            ..
        } => {
            let width = inner_width(area, 50).saturating_sub(2);
            let mut lines: Vec<Line> = options
                .iter()
                .enumerate()
                .map(|(row, option)| {
                    let text = truncate_text(option, width);
                    if row == *selected {
                        Line::from(vec![
                            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
                            Span::styled(
                                text,
                                Style::default()
                                    .fg(DEFAULT_THEME.primary)
                                    .bg(DEFAULT_THEME.selection_bg)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ])
                    } else {
                        Line::from(vec![
                            Span::raw("  "),
                            Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
                        ])
                    }
                })
                .collect();

            // Keep the cursor row on screen when the list is taller than the box
            let max_rows = body_rows(area);
            if lines.len() > max_rows {
                let first = selected.saturating_sub(max_rows - 1);
                lines = lines.into_iter().skip(first).take(max_rows).collect();
            }

            lines.push(Line::from(""));
            lines.push(hint_line("↑/↓ move  ↵ select  esc cancel"));
            render_box(frame, area, title, lines, 50);
        }
        Dialog::Message {
            title,
            lines,
            kind,
            scroll,
        } => {
            let color = match kind {
                MessageKind::Info => DEFAULT_THEME.fg,
                MessageKind::Error => DEFAULT_THEME.error,
            };
            let width = inner_width(area, 60);
            let body: Vec<Line> = lines
                .iter()
                .map(|line| Line::styled(truncate_text(line, width), Style::default().fg(color)))
                .collect();
            render_scrolling_box(frame, area, title, body, scroll, "↵ close");
        }
        Dialog::Notifications { entries, scroll } => {
            let width = inner_width(area, 60).saturating_sub(2);
            let body: Vec<Line> = if entries.is_empty() {
                vec![Line::styled(
                    "(no notifications)",
                    Style::default().fg(DEFAULT_THEME.comment),
                )]
            } else {
                entries
                    .iter()
                    .map(|entry| {
                        Line::from(vec![
                            Span::styled("• ", Style::default().fg(DEFAULT_THEME.secondary)),
                            Span::styled(
                                truncate_text(entry, width),
                                Style::default().fg(DEFAULT_THEME.fg),
                            ),
                        ])
                    })
                    .collect()
            };
            render_scrolling_box(
                frame,
                area,
                "Notifications",
                body,
                scroll,
                "d dismiss newest  ↵ close",
            );
        }
        Dialog::Report => {
            let rect = centered_rect(80, area.height.saturating_sub(4), area);
            frame.render_widget(Clear, rect);
            render_report_chart(frame, rect, report);
        }
    }
}

fn hint_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    Line::styled(text, Style::default().fg(DEFAULT_THEME.comment))
}

/// Rows left for a dialog body once the box chrome and hint are placed
fn body_rows(area: Rect) -> usize {
    usize::from(
        area.height
            .saturating_sub(BOX_CHROME_ROWS + HINT_ROWS)
            .max(1),
    )
}

/// Text columns inside a box `width_percent` wide
fn inner_width(area: Rect, width_percent: u16) -> usize {
    let outer = u32::from(area.width) * u32::from(width_percent) / 100;
    usize::try_from(outer)
        .unwrap_or(usize::MAX)
        .saturating_sub(usize::from(BOX_CHROME_COLS))
}

/// Show the window of `body` starting at `*scroll`, then the key hint
///
/// `*scroll` is clamped so the last page is full; `usize::MAX` means the end.
fn render_scrolling_box<'a>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: Vec<Line<'a>>,
    scroll: &mut usize,
    hint: &'a str,
) {
    let total = body.len();
    let max_rows = body_rows(area);
    *scroll = (*scroll).min(total.saturating_sub(max_rows));

    let mut lines: Vec<Line> = body.into_iter().skip(*scroll).take(max_rows).collect();
    let shown = lines.len();
    lines.push(Line::from(""));
    if total > max_rows {
        lines.push(hint_line(format!(
            "↑/↓ scroll  {}-{} of {}  {}",
            *scroll + 1,
            *scroll + shown,
            total,
            hint
        )));
    } else {
        lines.push(hint_line(hint));
    }
    render_box(frame, area, title, lines, 60);
}

/// Clear a centered box sized to `lines` and draw them inside a titled border
fn render_box(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, width_percent: u16) {
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(BOX_CHROME_ROWS);
    let rect = centered_rect(width_percent, height, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(true))
        .padding(Padding::new(2, 2, 1, 1));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_rows_leave_room_for_chrome() {
        assert_eq!(body_rows(Rect::new(0, 0, 100, 29)), 23);
        assert_eq!(body_rows(Rect::new(0, 0, 100, 3)), 1);
    }

    #[test]
    fn test_inner_width() {
        assert_eq!(inner_width(Rect::new(0, 0, 100, 29), 60), 54);
        assert_eq!(inner_width(Rect::new(0, 0, 4, 29), 60), 0);
    }
}
