//! Background store task.
//!
//! Owns the [`SecretStore`] so writes never block the UI loop. Every write
//! result comes back as [`AppEvent::StoreWrite`], followed by a full
//! [`AppEvent::Snapshot`] when the write landed. The task also polls the
//! store for external changes.

use super::{SecretStore, StoreError};
use crate::app::event::{AppEvent, WriteId};
use std::time::Duration;
use tokio::sync::mpsc;

enum StoreCommand {
    Set {
        write_id: WriteId,
        entity: String,
        value: String,
    },
}

pub struct StoreManager {
    cmd_tx: mpsc::UnboundedSender<StoreCommand>,
}

impl StoreManager {
    pub fn spawn(
        store: Box<dyn SecretStore>,
        poll_interval: Duration,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, poll_interval, cmd_rx, event_tx));
        Self { cmd_tx }
    }

    /// Queue a write. Returns immediately; the outcome arrives as an event.
    pub fn set_value(&self, write_id: WriteId, entity: String, value: String) -> Result<(), StoreError> {
        self.cmd_tx
            .send(StoreCommand::Set {
                write_id,
                entity,
                value,
            })
            .map_err(|_| StoreError::Closed)
    }
}

async fn run(
    mut store: Box<dyn SecretStore>,
    poll_interval: Duration,
    mut cmd_rx: mpsc::UnboundedReceiver<StoreCommand>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut interval = tokio::time::interval(poll_interval.max(Duration::from_millis(100)));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                let Some(StoreCommand::Set { write_id, entity, value }) = cmd else {
                    break;
                };
                let result = store.set_value(&entity, &value).map_err(|e| {
                    tracing::warn!(%entity, error = %e, "store write failed");
                    e.to_string()
                });
                let succeeded = result.is_ok();
                if event_tx.send(AppEvent::StoreWrite { write_id, entity, result }).is_err() {
                    break;
                }
                if succeeded && event_tx.send(AppEvent::Snapshot(store.snapshot())).is_err() {
                    break;
                }
            }
            _ = interval.tick() => {
                match store.reload() {
                    Ok(true) => {
                        tracing::debug!("store changed externally, pushing snapshot");
                        if event_tx.send(AppEvent::Snapshot(store.snapshot())).is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(e) => tracing::warn!(error = %e, "store reload failed"),
                }
            }
        }
    }
    tracing::debug!("store task stopped");
}
