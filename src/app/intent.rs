//! Named user intents.
//!
//! The rendered view never holds a reference back to the widget. Key
//! presses are translated into these intents, which the state machine in
//! [`crate::app::widget`] consumes.

use crate::config::AppEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Copy { entity: String },
    OpenEdit { app: AppEntry },
    EditDraft(String),
    Generate,
    Save,
    Cancel,
}
