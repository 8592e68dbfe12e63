use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use crate::ui::view::ModalView;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, modal: &ModalView) {
    let popup_area = centered_popup(frame.area(), 50, 40, 7);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", modal.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 || inner.width < 4 {
        return;
    }

    // Password input: keep the tail of long drafts visible
    let input_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    let room = (inner.width as usize).saturating_sub(3);
    let shown = tail_to_width(&modal.draft, room);
    let input = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(shown.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(input), input_area);

    let cursor_x = input_area.x + 2 + shown.width() as u16;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), input_area.y));

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled("Ctrl+G", Theme::key_hint()),
        Span::styled(" Generate  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Save  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}

/// Longest suffix of `text` that fits in `max` columns.
fn tail_to_width(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    text[start..].to_string()
}
