// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project and project-file listing commands.

use std::collections::BTreeMap;

use sodabim_client::{Project, ProjectFile};

use super::types::ProjectFileGroup;
use crate::state::AppState;

/// Projects visible to the signed-in user.
#[tauri::command]
pub async fn get_projects(
    state: tauri::State<'_, AppState>,
    user_id: i64,
) -> Result<Vec<Project>, String> {
    let api = state.api.lock().await;
    api.get_user_projects(user_id).await.map_err(|e| e.to_string())
}

/// Files of a project, filtered by an optional search term and grouped per
/// project for the listing screen.
#[tauri::command]
pub async fn get_project_files(
    state: tauri::State<'_, AppState>,
    user_id: i64,
    project_id: i64,
    search: Option<String>,
) -> Result<Vec<ProjectFileGroup>, String> {
    let api = state.api.lock().await;
    let files = api
        .get_user_project_files(user_id, project_id)
        .await
        .map_err(|e| e.to_string())?;

    let filtered = filter_by_name(files, search.as_deref().unwrap_or(""));
    Ok(group_by_project(filtered, project_id))
}

/// Upload a file from disk into a project.
#[tauri::command]
pub async fn upload_project_file(
    state: tauri::State<'_, AppState>,
    project_id: i64,
    user_id: i64,
    path: String,
) -> Result<ProjectFile, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("failed to read {path}: {e}"))?;
    let file_name = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.ifc")
        .to_string();

    let api = state.api.lock().await;
    api.upload_project_file(project_id, user_id, &file_name, bytes)
        .await
        .map_err(|e| e.to_string())
}

/// Resolve a download URL for a stored file.
#[tauri::command]
pub async fn download_file(
    state: tauri::State<'_, AppState>,
    file_id: i64,
) -> Result<String, String> {
    let api = state.api.lock().await;
    api.download_file(file_id).await.map_err(|e| e.to_string())
}

/// Case-insensitive substring filter on the file name.
fn filter_by_name(files: Vec<ProjectFile>, term: &str) -> Vec<ProjectFile> {
    if term.is_empty() {
        return files;
    }
    let needle = term.to_lowercase();
    files
        .into_iter()
        .filter(|file| file.file_name.to_lowercase().contains(&needle))
        .collect()
}

/// Group files by project id; rows without one belong to the project that
/// was queried.
fn group_by_project(files: Vec<ProjectFile>, fallback_project: i64) -> Vec<ProjectFileGroup> {
    let mut groups: BTreeMap<i64, Vec<ProjectFile>> = BTreeMap::new();
    for file in files {
        groups
            .entry(file.project_id.unwrap_or(fallback_project))
            .or_default()
            .push(file);
    }

    groups
        .into_iter()
        .map(|(project_id, files)| ProjectFileGroup { project_id, files })
        .collect()
}
