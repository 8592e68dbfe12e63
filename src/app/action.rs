use crate::app::event::WriteId;

/// Side effects requested by the state machine, executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CopyToClipboard { text: String },
    Notify(Notification),
    WriteStore { write_id: WriteId, entity: String, value: String },
    ReloadConfig,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotifyLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotifyLevel::Error, message: message.into() }
    }
}
