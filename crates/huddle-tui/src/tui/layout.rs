// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Main Panel               | Detail (when open)     |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: league, week, live status, tab indicator.
    pub status_bar: Rect,
    /// Tab content: standings table, matchup list or league picker.
    pub main_panel: Rect,
    /// Matchup detail pane, only when open.
    pub detail: Option<Rect>,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
///
/// With the detail pane open the middle section is split 40/60 so the two
/// lineups get the larger share.
pub fn build_layout(area: Rect, detail_open: bool) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(5),    // middle section
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    if !detail_open {
        return AppLayout {
            status_bar,
            main_panel: middle,
            detail: None,
            help_bar,
        };
    }

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(middle);

    AppLayout {
        status_bar,
        main_panel: horizontal[0],
        detail: Some(horizontal[1]),
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        for detail_open in [false, true] {
            let layout = build_layout(test_area(), detail_open);
            let mut rects = vec![
                ("status_bar", layout.status_bar),
                ("main_panel", layout.main_panel),
                ("help_bar", layout.help_bar),
            ];
            if let Some(detail) = layout.detail {
                rects.push(("detail", detail));
            }
            for (name, rect) in &rects {
                assert!(
                    rect.width > 0 && rect.height > 0,
                    "{} has zero area: {:?}",
                    name,
                    rect
                );
            }
        }
    }

    #[test]
    fn layout_bars_are_one_row() {
        let layout = build_layout(test_area(), false);
        assert_eq!(layout.status_bar.height, 1, "Status bar should be exactly 1 row");
        assert_eq!(layout.help_bar.height, 1, "Help bar should be exactly 1 row");
    }

    #[test]
    fn layout_without_detail_uses_full_width() {
        let layout = build_layout(test_area(), false);
        assert!(layout.detail.is_none());
        assert_eq!(layout.main_panel.width, 160);
        assert_eq!(layout.main_panel.height, 48);
    }

    #[test]
    fn layout_detail_sits_right_of_main_panel() {
        let layout = build_layout(test_area(), true);
        let detail = layout.detail.unwrap();
        assert_eq!(detail.y, layout.main_panel.y);
        assert_eq!(detail.x, layout.main_panel.x + layout.main_panel.width);
        assert!(detail.width > layout.main_panel.width);
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 8);
        let layout = build_layout(area, true);
        let rects = [
            layout.status_bar,
            layout.main_panel,
            layout.detail.unwrap(),
            layout.help_bar,
        ];
        for rect in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: rect {:?} has zero area",
                rect
            );
        }
    }
}
