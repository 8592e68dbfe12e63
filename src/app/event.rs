use crate::store::Snapshot;
use crossterm::event::Event as CrosstermEvent;

pub type WriteId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Full store contents, pushed on startup, after writes and on external changes
    Snapshot(Snapshot),

    /// Outcome of a queued store write
    StoreWrite {
        write_id: WriteId,
        entity: String,
        result: Result<(), String>,
    },

    /// Tick for toast expiry
    Tick,
}
