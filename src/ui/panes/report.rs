//! Participation report chart
//!
//! One bar per society or event name, tallest first. Bars that do not fit
//! the width are left off.

use super::utils::truncate_text;
use crate::report::ReportCounter;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 2;

/// Render the report counter as a bar chart
pub fn render_report_chart(frame: &mut Frame, area: Rect, report: &ReportCounter) {
    let block = Block::default()
        .title(format!(
            " Participation Report ({} total) ",
            report.total()
        ))
        .title_bottom(Line::styled(
            " ↵ close ",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let inner_width = area.width.saturating_sub(2);
    let max_bars = ((inner_width + BAR_GAP) / (BAR_WIDTH + BAR_GAP)).max(1) as usize;

    let bars: Vec<Bar> = report
        .entries()
        .into_iter()
        .take(max_bars)
        .map(|(name, count)| {
            Bar::default()
                .value(count)
                .label(Line::from(truncate_text(&name, BAR_WIDTH as usize)))
                .style(Style::default().fg(DEFAULT_THEME.bar))
                .value_style(Style::default().fg(Color::Black).bg(DEFAULT_THEME.bar))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .label_style(Style::default().fg(DEFAULT_THEME.fg))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
