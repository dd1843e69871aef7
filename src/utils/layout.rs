use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split a screen into header, content, navigation bar and footer.
///
/// Returns `(header, content, nav, footer)`.
pub fn create_standard_layout(
    area: Rect,
    header_height: u16,
    nav_height: u16,
    footer_height: u16,
) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(nav_height),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// A centered rect of at most `width` x `height` inside `area`
pub fn center_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, nav, footer) =
            create_standard_layout(Rect::new(0, 0, 60, 30), 3, 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(nav.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 22);
        assert_eq!(content.y, 3);
    }

    #[test]
    fn test_center_popup_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(center_popup(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(center_popup(area, 50, 50), area);
    }
}
