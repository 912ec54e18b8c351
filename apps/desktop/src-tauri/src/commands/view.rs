// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation-state commands: theme and modal dragging.

use crate::state::AppState;
use crate::view_state::{Theme, ViewState};

/// Current theme and modal placement.
#[tauri::command]
pub fn get_view_state(state: tauri::State<'_, AppState>) -> ViewState {
    *state.view.lock().unwrap()
}

/// Flip between light and dark, returning the new theme.
#[tauri::command]
pub fn toggle_theme(state: tauri::State<'_, AppState>) -> Theme {
    state.view.lock().unwrap().theme.toggle()
}

/// Start dragging the comment modal from the given cursor position.
#[tauri::command]
pub fn begin_modal_drag(state: tauri::State<'_, AppState>, x: f64, y: f64) {
    state.view.lock().unwrap().modal.begin_drag(x, y);
}

/// Follow the cursor, returning the modal's new position.
#[tauri::command]
pub fn drag_modal(state: tauri::State<'_, AppState>, x: f64, y: f64) -> (f64, f64) {
    let mut view = state.view.lock().unwrap();
    view.modal.drag_to(x, y);
    (view.modal.x, view.modal.y)
}

/// Finish the drag, keeping the modal where it is.
#[tauri::command]
pub fn end_modal_drag(state: tauri::State<'_, AppState>) {
    state.view.lock().unwrap().modal.end_drag();
}
