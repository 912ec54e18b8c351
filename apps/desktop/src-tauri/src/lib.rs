// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SodaBIM Desktop Application
//!
//! Native Tauri shell around the SodaBIM annotation core. The 3D scene
//! lives in the webview; this side owns the viewing session (selection,
//! comments, view mode), the backend API client, and the presentation
//! state, and talks to the scene through window events.

mod bridge;
mod commands;
mod state;
mod view_state;

use sodabim_client::{ApiClient, ApiConfig};
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let api = ApiClient::new(ApiConfig::from_env()).expect("failed to build the API client");

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(AppState::new(api))
        .invoke_handler(tauri::generate_handler![
            commands::viewer::init_viewer,
            commands::viewer::dispose_viewer,
            commands::viewer::load_model,
            commands::viewer::surface_clicked,
            commands::viewer::deliver_pick,
            commands::viewer::model_loaded,
            commands::viewer::model_load_failed,
            commands::viewer::set_view_mode,
            commands::viewer::set_comment_draft,
            commands::viewer::submit_comment,
            commands::viewer::get_comments,
            commands::viewer::list_comments,
            commands::viewer::highlight_comment,
            commands::viewer::close_modal,
            commands::viewer::selected_element_json,
            commands::auth::login,
            commands::auth::register,
            commands::auth::logout,
            commands::auth::restore_session,
            commands::projects::get_projects,
            commands::projects::get_project_files,
            commands::projects::upload_project_file,
            commands::projects::download_file,
            commands::file_dialog::open_model_file,
            commands::view::get_view_state,
            commands::view::toggle_theme,
            commands::view::begin_modal_drag,
            commands::view::drag_modal,
            commands::view::end_modal_drag,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
