use crate::app::action::NotifyLevel;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if let Some(toast) = &state.toast {
        let style = match toast.notification.level {
            NotifyLevel::Info => Theme::toast_info(),
            NotifyLevel::Error => Theme::toast_error(),
        };
        parts.push(Span::styled(format!(" {} ", toast.notification.message), style));
    } else if state.widget.modal.is_open() {
        parts.push(Span::styled(" Editing ", Theme::status_bar()));
    } else {
        parts.push(Span::styled(
            " ↑↓ Select  Enter Copy  e Edit  Ctrl+R Reload  q Quit ",
            Theme::status_bar(),
        ));
    }

    let count = format!(" {} apps ", state.widget.config.len());
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + count.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(count, Style::default().fg(Color::Cyan).bg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
