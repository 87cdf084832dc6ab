use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the dashboard, top to bottom.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub size: Rect,
    pub header_area: Rect,
    pub stats_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub footer_area: Rect,
}

impl RenderContext {
    #[must_use]
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(size);

        Self {
            size,
            header_area: chunks[0],
            stats_area: chunks[1],
            filter_area: chunks[2],
            list_area: chunks[3],
            footer_area: chunks[4],
        }
    }

    #[must_use]
    pub fn for_test(width: u16, height: u16) -> Self {
        Self::new(Rect::new(0, 0, width, height))
    }

    /// Inner list area once the border is drawn.
    #[must_use]
    pub fn list_inner(&self) -> Rect {
        padded_content_area(self.list_area)
    }
}

/// Strips a one-cell border and one column of horizontal padding.
#[must_use]
pub fn padded_content_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_without_gaps() {
        let ctx = RenderContext::for_test(100, 40);
        assert_eq!(ctx.header_area.y, 0);
        assert_eq!(ctx.stats_area.height, 3);
        assert_eq!(ctx.filter_area.y, 4);
        assert_eq!(ctx.list_area.y, 5);
        assert_eq!(ctx.footer_area.y, 39);
        assert_eq!(ctx.list_area.height, 34);
    }

    #[test]
    fn test_list_inner_strips_border_and_padding() {
        let ctx = RenderContext::for_test(100, 40);
        let inner = ctx.list_inner();
        assert_eq!(inner.x, 2);
        assert_eq!(inner.width, 96);
        assert_eq!(inner.height, 32);
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(80, 80, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 80);
    }
}
