use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
};

/// Border style for a pane, highlighted when it has focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// A rect `width_percent` wide and `height` rows tall, centered in `area`
pub(crate) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = ((area.width as u32 * width_percent.min(100) as u32) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Shorten `text` to `width` characters, marking the cut with an ellipsis
pub(crate) fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 10, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_height() {
        let area = Rect::new(5, 5, 20, 4);
        let rect = centered_rect(100, 10, area);
        assert_eq!(rect, Rect::new(5, 5, 20, 4));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Chess", 9), "Chess");
        assert_eq!(truncate_text("Chess Club", 9), "Chess Cl…");
        assert_eq!(truncate_text("Ünïcödé Society", 4), "Ünï…");
        assert_eq!(truncate_text("abc", 0), "…");
    }
}
