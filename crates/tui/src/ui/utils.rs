//! Layout helpers shared by the wizard views.

use ratatui::prelude::*;

/// Creates a centered rectangular area within a given rectangle, sized as
/// percentages of the parent. Used to keep the wizard column readable on
/// wide terminals.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(70, 90, parent);
        assert!(inner.x >= parent.x && inner.right() <= parent.right());
        assert!(inner.y >= parent.y && inner.bottom() <= parent.bottom());
        assert_eq!(inner.width, 70);
    }
}
