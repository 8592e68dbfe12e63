//! Password widget state machine.
//!
//! [`WidgetState`] combines the configured apps, the latest store snapshot
//! and the modal. All transitions happen in [`WidgetState::apply`] and
//! [`WidgetState::write_finished`]; neither performs I/O. Effects are
//! returned as [`Action`]s for the host to run.

use crate::app::action::{Action, Notification};
use crate::app::event::WriteId;
use crate::app::intent::Intent;
use crate::app::password::generate_password;
use crate::config::{validate_apps, AppEntry, ConfigError};
use crate::store::{self, Snapshot};
use rand::RngExt;

/// Rows a host should reserve per tile.
pub const SIZE_HINT: u16 = 2;

const COPIED: &str = "Copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open { app: AppEntry, draft: String },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }
}

/// A save that has been handed to the store but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub write_id: WriteId,
    pub app: AppEntry,
    pub draft: String,
}

#[derive(Debug, Default)]
pub struct WidgetState {
    pub config: Vec<AppEntry>,
    pub snapshot: Snapshot,
    pub modal: Modal,
    pub pending_saves: Vec<PendingSave>,
    /// Drafts whose write failed while another edit was open. They are
    /// reopened once the modal closes again.
    pub failed_saves: Vec<PendingSave>,
    next_write_id: WriteId,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size_hint(&self) -> u16 {
        SIZE_HINT
    }

    /// Validate and install a new app list. On error the previous
    /// configuration and modal are left untouched.
    pub fn configure(&mut self, apps: Vec<AppEntry>) -> Result<(), ConfigError> {
        validate_apps(&apps)?;
        self.reconfigure(apps);
        Ok(())
    }

    /// Replace the app list wholesale. Any open modal is closed, since its
    /// app may no longer be configured.
    pub fn reconfigure(&mut self, apps: Vec<AppEntry>) {
        tracing::info!(apps = apps.len(), "widget reconfigured");
        self.config = apps;
        self.modal = Modal::Closed;
    }

    /// Replace the snapshot wholesale. An open draft is kept as is.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    pub fn lookup(&self, entity: &str) -> &str {
        store::lookup(&self.snapshot, entity)
    }

    fn allocate_write_id(&mut self) -> WriteId {
        let id = self.next_write_id;
        self.next_write_id += 1;
        id
    }

    /// Run one user intent through the state machine.
    pub fn apply<R: RngExt>(&mut self, intent: Intent, rng: &mut R) -> Vec<Action> {
        match intent {
            Intent::Copy { entity } => {
                let text = self.lookup(&entity).to_string();
                tracing::debug!(%entity, "copying secret");
                vec![
                    Action::CopyToClipboard { text },
                    Action::Notify(Notification::info(COPIED)),
                ]
            }
            Intent::OpenEdit { app } => {
                let draft = match self.failed_saves.iter().position(|f| f.app.entity == app.entity) {
                    Some(i) => self.failed_saves.remove(i).draft,
                    None => self.lookup(&app.entity).to_string(),
                };
                self.modal = Modal::Open { app, draft };
                vec![]
            }
            Intent::EditDraft(value) => {
                if let Modal::Open { draft, .. } = &mut self.modal {
                    *draft = value;
                }
                vec![]
            }
            Intent::Generate => {
                let Modal::Open { app, draft } = &mut self.modal else {
                    return vec![];
                };
                *draft = generate_password(rng, app.password_length, app.use_numbers, app.use_symbols);
                tracing::debug!(entity = %app.entity, length = app.password_length, "generated password");
                vec![
                    Action::CopyToClipboard { text: draft.clone() },
                    Action::Notify(Notification::info(COPIED)),
                ]
            }
            Intent::Save => {
                let Modal::Open { app, draft } = std::mem::take(&mut self.modal) else {
                    return vec![];
                };
                let write_id = self.allocate_write_id();
                let action = Action::WriteStore {
                    write_id,
                    entity: app.entity.clone(),
                    value: draft.clone(),
                };
                self.failed_saves.retain(|f| f.app.entity != app.entity);
                self.pending_saves.push(PendingSave { write_id, app, draft });
                self.restore_failed_save();
                vec![action]
            }
            Intent::Cancel => {
                if !self.modal.is_open() {
                    return vec![];
                }
                self.modal = Modal::Closed;
                self.restore_failed_save();
                vec![]
            }
        }
    }

    /// Settle a pending save. A failed write reopens the modal with the
    /// unsaved draft, unless another edit is already open or the app has
    /// been removed from the configuration.
    pub fn write_finished(
        &mut self,
        write_id: WriteId,
        entity: &str,
        result: &Result<(), String>,
    ) -> Vec<Action> {
        let pending = self
            .pending_saves
            .iter()
            .position(|p| p.write_id == write_id)
            .map(|i| self.pending_saves.remove(i));

        let name = pending
            .as_ref()
            .map(|p| p.app.name.as_str())
            .unwrap_or(entity)
            .to_string();

        let error = match result {
            Ok(()) => return vec![Action::Notify(Notification::info(format!("Saved {}", name)))],
            Err(error) => error,
        };

        let notify = Action::Notify(Notification::error(format!("Failed to save {}: {}", name, error)));
        let Some(pending) = pending else {
            return vec![notify];
        };
        if self.modal.is_open() {
            tracing::debug!(%entity, "save failed while another edit is open, queueing draft");
            self.failed_saves.push(pending);
            return vec![notify];
        }
        self.failed_saves.insert(0, pending);
        self.restore_failed_save();
        vec![notify]
    }

    /// Reopen the oldest failed draft whose app is still configured.
    /// Drafts for removed apps are dropped.
    fn restore_failed_save(&mut self) {
        while !self.failed_saves.is_empty() {
            let failed = self.failed_saves.remove(0);
            if let Some(app) = self.config.iter().find(|a| a.entity == failed.app.entity) {
                self.modal = Modal::Open {
                    app: app.clone(),
                    draft: failed.draft,
                };
                return;
            }
            tracing::debug!(entity = %failed.app.entity, "dropping failed draft for removed app");
        }
    }
}
