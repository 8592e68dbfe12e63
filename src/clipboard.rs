//! System clipboard access.
//!
//! Clipboard failures are never fatal: callers log and move on.

use anyhow::{anyhow, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// `arboard`-backed clipboard. The handle is kept for the whole session
/// because on X11/Wayland the contents disappear when it is dropped.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let cb = self
            .inner
            .as_mut()
            .ok_or_else(|| anyhow!("no clipboard available"))?;
        cb.set_text(text.to_string())?;
        Ok(())
    }
}
