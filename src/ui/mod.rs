mod layout;
mod modal;
mod status_bar;
mod theme;
mod tiles;
pub mod view;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let widget = &state.widget;
    let vm = view::build_view_model(&widget.config, &widget.snapshot, &widget.modal);
    let app_layout = layout::compute_layout(frame.area());

    tiles::render(
        frame,
        app_layout.tiles,
        &state.title,
        &vm.tiles,
        state.selected,
        widget.size_hint(),
    );
    status_bar::render(frame, app_layout.status_bar, state);

    if let Some(modal) = &vm.modal {
        modal::render(frame, modal);
    }
}
