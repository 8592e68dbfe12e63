use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::intent::Intent;
use crate::app::state::AppState;
use crate::app::widget::Modal;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::RngExt;
use std::time::Instant;

pub fn handle_event<R: RngExt>(
    state: &mut AppState,
    event: AppEvent,
    rng: &mut R,
) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, rng),
        AppEvent::Snapshot(snapshot) => {
            state.widget.set_snapshot(snapshot);
            state.dirty = true;
            vec![]
        }
        AppEvent::StoreWrite {
            write_id,
            entity,
            result,
        } => {
            state.dirty = true;
            state.widget.write_finished(write_id, &entity, &result)
        }
        AppEvent::Tick => {
            state.expire_toast(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal<R: RngExt>(
    state: &mut AppState,
    event: CEvent,
    rng: &mut R,
) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key, rng)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<R: RngExt>(state: &mut AppState, key: KeyEvent, rng: &mut R) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The modal captures all input while open
    let intent = if let Modal::Open { draft, .. } = &state.widget.modal {
        modal_intent(draft, key)
    } else {
        match list_key(state, key) {
            ListKey::Intent(intent) => Some(intent),
            ListKey::Action(action) => return vec![action],
            ListKey::None => None,
        }
    };

    match intent {
        Some(intent) => state.widget.apply(intent, rng),
        None => vec![],
    }
}

/// Map a key pressed inside the edit modal to an intent.
fn modal_intent(draft: &str, key: KeyEvent) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => Some(Intent::Cancel),
        KeyCode::Enter => Some(Intent::Save),
        KeyCode::Char('g') if ctrl => Some(Intent::Generate),
        KeyCode::Char('u') if ctrl => Some(Intent::EditDraft(String::new())),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => {
            let mut value = draft.to_string();
            value.push(c);
            Some(Intent::EditDraft(value))
        }
        KeyCode::Backspace => {
            let mut value = draft.to_string();
            value.pop()?;
            Some(Intent::EditDraft(value))
        }
        _ => None,
    }
}

enum ListKey {
    Intent(Intent),
    Action(Action),
    None,
}

fn list_key(state: &mut AppState, key: KeyEvent) -> ListKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => ListKey::Action(Action::ReloadConfig),
        KeyCode::Char('q') | KeyCode::Esc => ListKey::Action(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            ListKey::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            ListKey::None
        }
        KeyCode::Enter | KeyCode::Char('c') => match state.selected_app() {
            Some(app) => ListKey::Intent(Intent::Copy {
                entity: app.entity.clone(),
            }),
            None => ListKey::None,
        },
        KeyCode::Char('e') => match state.selected_app() {
            Some(app) => ListKey::Intent(Intent::OpenEdit { app: app.clone() }),
            None => ListKey::None,
        },
        _ => ListKey::None,
    }
}
