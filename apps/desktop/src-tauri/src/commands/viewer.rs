// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewing-session commands: lifecycle, picking, comments, highlighting.
//!
//! `surface_clicked` holds the session lock for the whole pick round trip;
//! the frontend answers through `deliver_pick`, which only touches the
//! reply slot. Clicks queued behind the lock therefore start their own
//! pick only after the current one has resolved.

use std::path::Path;

use sodabim_core::{ElementId, SelectionState, ViewMode};

use super::types::{PickHitDto, SelectedElement, SelectionSnapshot};
use crate::bridge::WebviewViewer;
use crate::state::AppState;

/// Attach the webview scene to the session. Safe to call on every mount;
/// an already-attached scene is kept.
#[tauri::command]
pub async fn init_viewer(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> Result<(), String> {
    let viewer = WebviewViewer::new(app, state.picks.clone(), state.loads.clone());
    state.session.lock().await.init(viewer);
    log::info!("viewer session initialized");
    Ok(())
}

/// End the viewing session, dropping the selection and all comments.
#[tauri::command]
pub async fn dispose_viewer(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.session.lock().await.teardown();
    log::info!("viewer session disposed");
    Ok(())
}

/// Load a model file into the scene. Returns the model id, or `None` when
/// the viewer has not been initialized yet.
#[tauri::command]
pub async fn load_model(
    state: tauri::State<'_, AppState>,
    path: String,
) -> Result<Option<u32>, String> {
    let mut session = state.session.lock().await;
    session
        .load_model(Path::new(&path))
        .await
        .map(|model| model.map(|m| m.0))
        .map_err(|e| e.to_string())
}

/// A click landed on the viewer surface: run the pick workflow and report
/// the resulting selection state.
#[tauri::command]
pub async fn surface_clicked(
    state: tauri::State<'_, AppState>,
) -> Result<SelectionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.handle_click().await;
    Ok(snapshot(&session))
}

/// The scene's answer to `viewer:pick-request`: the hit, or `null` on a
/// miss. Stale answers (no pick waiting) are dropped.
#[tauri::command]
pub fn deliver_pick(state: tauri::State<'_, AppState>, hit: Option<PickHitDto>) {
    if !state.picks.fulfill(hit) {
        log::debug!("dropping pick reply with no pick outstanding");
    }
}

/// The scene finished loading a model.
#[tauri::command]
pub fn model_loaded(state: tauri::State<'_, AppState>, model_id: u32) {
    if !state.loads.fulfill(Ok(model_id)) {
        log::debug!("dropping model-loaded reply with no load outstanding");
    }
}

/// The scene failed to load a model.
#[tauri::command]
pub fn model_load_failed(state: tauri::State<'_, AppState>, message: String) {
    if !state.loads.fulfill(Err(message)) {
        log::debug!("dropping model-load failure with no load outstanding");
    }
}

/// Switch between plain navigation and element inspection.
#[tauri::command]
pub async fn set_view_mode(
    state: tauri::State<'_, AppState>,
    mode: ViewMode,
) -> Result<SelectionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.set_view_mode(mode);
    Ok(snapshot(&session))
}

/// Mirror the comment textarea into the session.
#[tauri::command]
pub async fn set_comment_draft(
    state: tauri::State<'_, AppState>,
    text: String,
) -> Result<(), String> {
    state.session.lock().await.set_comment_draft(text);
    Ok(())
}

/// Save the drafted comment against the current selection.
#[tauri::command]
pub async fn submit_comment(
    state: tauri::State<'_, AppState>,
) -> Result<SelectionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.submit_comment();
    Ok(snapshot(&session))
}

/// Comments saved for one element, oldest first.
#[tauri::command]
pub async fn get_comments(
    state: tauri::State<'_, AppState>,
    element_id: u32,
) -> Result<Vec<sodabim_core::Comment>, String> {
    let session = state.session.lock().await;
    Ok(session.comments(ElementId(element_id)).to_vec())
}

/// Every saved comment, ordered by element id for a stable listing.
#[tauri::command]
pub async fn list_comments(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<sodabim_core::Comment>, String> {
    let session = state.session.lock().await;
    let mut comments: Vec<_> = session
        .store()
        .iter()
        .flat_map(|(_, comments)| comments.iter().cloned())
        .collect();
    comments.sort_by_key(|c| c.element_id);
    Ok(comments)
}

/// Clicking a comment's element name re-highlights that element without
/// touching the current selection.
#[tauri::command]
pub async fn highlight_comment(
    state: tauri::State<'_, AppState>,
    element_id: u32,
) -> Result<(), String> {
    state
        .session
        .lock()
        .await
        .highlight_element(ElementId(element_id));
    Ok(())
}

/// Close the comment modal (same as clearing the selection).
#[tauri::command]
pub async fn close_modal(state: tauri::State<'_, AppState>) -> Result<SelectionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.close_modal();
    Ok(snapshot(&session))
}

/// Raw properties of the selected element as pretty JSON, for the
/// inspector window.
#[tauri::command]
pub async fn selected_element_json(
    state: tauri::State<'_, AppState>,
) -> Result<Option<String>, String> {
    let session = state.session.lock().await;
    Ok(session
        .correlator()
        .selected()
        .map(|properties| properties.to_pretty_json()))
}

/// Project the session's selection workflow into one frontend payload.
fn snapshot(session: &sodabim_core::ViewerSession<WebviewViewer>) -> SelectionSnapshot {
    let correlator = session.correlator();
    let selected = match correlator.state() {
        SelectionState::Selected(properties) => Some(SelectedElement {
            element_id: properties.id().0,
            name: properties.display_name().to_string(),
        }),
        SelectionState::NoSelection => None,
    };
    let comments = selected
        .as_ref()
        .map(|s| session.comments(ElementId(s.element_id)).to_vec())
        .unwrap_or_default();

    SelectionSnapshot {
        modal_open: correlator.modal_open(),
        selected,
        draft: correlator.draft().to_string(),
        comments,
    }
}
