use crate::ui::theme::Theme;
use crate::ui::view::Tile;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, title: &str, tiles: &[Tile], selected: usize, row_height: u16) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tiles.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No apps configured.", Style::default().fg(Theme::TEXT_MUTED))),
            Line::from(Span::styled(
                "Add [[apps]] entries to the config file and press Ctrl+R.",
                Theme::hint_text(),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let row_height = row_height.max(1);
    let visible = (inner.height / row_height).max(1) as usize;
    let start = first_visible(selected, visible);
    let name_width = (inner.width as usize).saturating_sub(14);

    let mut lines: Vec<Line> = Vec::new();
    for (i, tile) in tiles.iter().enumerate().skip(start).take(visible) {
        let is_selected = i == selected;
        let (marker, name_style) = if is_selected {
            ("❯ ", Theme::tile_selected())
        } else {
            ("  ", Theme::tile_name())
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(truncate_to_width(&tile.name, name_width), name_style),
        ];
        if !tile.has_value {
            spans.push(Span::styled("  (not set)", Theme::tile_unset()));
        }
        lines.push(Line::from(spans));

        for row in 1..row_height {
            if row == 1 && is_selected {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled("Enter", Theme::key_hint()),
                    Span::styled(" Copy  ", Theme::hint_text()),
                    Span::styled("e", Theme::key_hint()),
                    Span::styled(" Edit", Theme::hint_text()),
                ]));
            } else {
                lines.push(Line::default());
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Index of the first tile to draw so that `selected` stays on screen.
fn first_visible(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// Cut `text` to at most `max` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Email", 10), "Email");
        assert_eq!(truncate_to_width("Email", 5), "Email");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("Online Banking", 8), "Online …");
        assert_eq!(truncate_to_width("Email", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("邮件账户", 5), "邮件…");
    }

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        assert_eq!(first_visible(0, 5), 0);
        assert_eq!(first_visible(4, 5), 0);
        assert_eq!(first_visible(7, 5), 3);
        assert_eq!(first_visible(3, 1), 3);
    }
}
