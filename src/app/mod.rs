//! Widget core and host glue: state machine, intents, events, and side effects.

pub mod action;
pub mod event;
pub mod handler;
pub mod intent;
pub mod password;
pub mod state;
pub mod widget;
