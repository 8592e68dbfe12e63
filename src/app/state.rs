use crate::app::action::Notification;
use crate::app::widget::WidgetState;
use crate::config::{AppConfig, AppEntry};
use std::time::{Duration, Instant};

/// A notification shown in the status bar until it expires.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Everything the terminal host tracks around the widget.
pub struct AppState {
    pub widget: WidgetState,
    pub title: String,
    pub selected: usize,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            widget: WidgetState::new(),
            title: config.title.clone(),
            selected: 0,
            toast: None,
            toast_duration: Duration::from_secs(config.notifications.toast_secs),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn selected_app(&self) -> Option<&AppEntry> {
        self.widget.config.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.widget.config.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.widget.config.len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Keep the selection inside the app list after a reconfigure.
    pub fn clamp_selection(&mut self) {
        let len = self.widget.config.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn show_toast(&mut self, notification: Notification) {
        self.toast = Some(Toast {
            notification,
            expires_at: Instant::now() + self.toast_duration,
        });
        self.dirty = true;
    }

    /// Drop the toast once it has expired. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        match &self.toast {
            Some(toast) if now >= toast.expires_at => {
                self.toast = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }
}
