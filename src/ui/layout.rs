use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tiles: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Tiles
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tiles: chunks[0],
        status_bar: chunks[1],
    }
}

/// Centered popup of `percent_x` width (at least `min_w`) and fixed height.
pub fn centered_popup(area: Rect, percent_x: u16, min_w: u16, height: u16) -> Rect {
    let w = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let w = w
        .max(min_w)
        .min(area.width.saturating_sub(2));
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_bar() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.tiles.height, 23);
    }

    #[test]
    fn test_popup_is_centered_and_clamped() {
        let popup = centered_popup(Rect::new(0, 0, 100, 30), 50, 40, 7);
        assert_eq!(popup, Rect::new(25, 11, 50, 7));

        let tiny = centered_popup(Rect::new(0, 0, 30, 5), 50, 40, 7);
        assert_eq!(tiny.width, 28);
        assert_eq!(tiny.height, 5);
    }

    #[test]
    fn test_popup_on_very_wide_terminal() {
        let popup = centered_popup(Rect::new(0, 0, 4000, 50), 60, 40, 7);
        assert_eq!(popup.width, 2400);
        assert_eq!(popup.x, 800);
    }
}
