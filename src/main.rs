mod app;
mod clipboard;
mod config;
mod logging;
mod store;
mod ui;

use crate::app::action::{Action, Notification};
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::store::file::FileStore;
use crate::store::manager::StoreManager;
use crate::store::memory::MemoryStore;
use crate::store::{SecretStore, Snapshot};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path)?;

    logging::init(&cfg.logging)?;
    tracing::info!(config = %config_path.display(), apps = cfg.apps.len(), "starting passdeck");

    let store: Box<dyn SecretStore> = if cfg.store.in_memory {
        Box::new(MemoryStore::new(Snapshot::new()))
    } else {
        let store = FileStore::open(&cfg.store.path)
            .with_context(|| format!("Failed to open secret store {}", cfg.store.path.display()))?;
        tracing::info!(path = %store.path().display(), "using file store");
        Box::new(store)
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, &config_path, store).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "passdeck exited with an error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    config_path: &Path,
    store: Box<dyn SecretStore>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(&cfg);
    state.widget.configure(cfg.apps.clone())?;
    state.widget.set_snapshot(store.snapshot());

    let store_manager = StoreManager::spawn(
        store,
        Duration::from_secs(cfg.store.poll_interval_secs),
        event_tx.clone(),
    );
    let mut clipboard = SystemClipboard::new();
    let mut rng = rand::rng();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (toast expiry only needs a coarse clock)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else {
            break;
        };

        let actions = handler::handle_event(&mut state, event, &mut rng);

        for action in actions {
            match action {
                Action::CopyToClipboard { text } => {
                    if let Err(e) = clipboard.write_text(&text) {
                        tracing::warn!(error = %e, "clipboard write failed");
                    }
                }
                Action::Notify(notification) => state.show_toast(notification),
                Action::WriteStore {
                    write_id,
                    entity,
                    value,
                } => {
                    if let Err(e) = store_manager.set_value(write_id, entity.clone(), value) {
                        // Report through the normal path so the draft is restored
                        let _ = event_tx.send(AppEvent::StoreWrite {
                            write_id,
                            entity,
                            result: Err(e.to_string()),
                        });
                    }
                }
                Action::ReloadConfig => reload_config(&mut state, config_path),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            tracing::info!("quitting");
            break;
        }

        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Re-read the config file and hand the app list to the widget. On any
/// error the current configuration stays in place.
fn reload_config(state: &mut AppState, config_path: &Path) {
    let new_cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::warn!(error = %message, "config reload failed");
            state.show_toast(Notification::error(format!("Reload failed: {}", message)));
            return;
        }
    };
    match state.widget.configure(new_cfg.apps) {
        Ok(()) => {
            state.title = new_cfg.title;
            state.clamp_selection();
            state.show_toast(Notification::info("Configuration reloaded"));
        }
        Err(e) => state.show_toast(Notification::error(format!("Reload failed: {}", e))),
    }
}
