// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared types for Tauri commands
//!
//! These types are serialized to/from JSON and must match the TypeScript
//! interfaces in the frontend.

use serde::{Deserialize, Serialize};

use sodabim_client::ProjectFile;
use sodabim_core::Comment;

/// Pick result reported by the 3D scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickHitDto {
    /// Model the hit belongs to.
    pub model_id: u32,
    /// Identity of the picked element.
    pub element_id: u32,
    /// Raw property bag from the scene's model data.
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// The element currently selected in the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedElement {
    pub element_id: u32,
    pub name: String,
}

/// Everything the frontend needs to render the selection workflow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub modal_open: bool,
    pub selected: Option<SelectedElement>,
    pub draft: String,
    pub comments: Vec<Comment>,
}

/// Project files grouped for the listing screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFileGroup {
    pub project_id: i64,
    pub files: Vec<ProjectFile>,
}

/// Where a picked file should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewerTarget {
    /// The 3D model viewer.
    Viewer,
    /// The plain document viewer.
    DocsViewer,
}

/// File information from the native open dialog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub path: String,
    pub name: String,
    pub size: u64,
    pub target: ViewerTarget,
}
