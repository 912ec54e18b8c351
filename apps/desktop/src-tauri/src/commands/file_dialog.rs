// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Native file dialog commands
//!
//! Provides the native file picker for model files and decides which
//! viewer a picked file opens in.

use super::types::{FileInfo, ViewerTarget};
use tauri_plugin_dialog::DialogExt;

/// Open a native file dialog to select a model or document file.
/// Returns file info including the viewer it should open in.
#[tauri::command]
pub async fn open_model_file(app: tauri::AppHandle) -> Result<Option<FileInfo>, String> {
    let file_path = app
        .dialog()
        .file()
        .add_filter("IFC Files", &["ifc", "ifczip", "ifcxml"])
        .add_filter("All Files", &["*"])
        .set_title("Open Model File")
        .blocking_pick_file();

    match file_path {
        Some(path) => {
            let path_str = path.to_string();

            let metadata = tokio::fs::metadata(&path_str)
                .await
                .map_err(|e| format!("Failed to read file metadata: {}", e))?;

            let name = std::path::Path::new(&path_str)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown.ifc")
                .to_string();
            let target = viewer_target(&name);

            Ok(Some(FileInfo {
                path: path_str,
                name,
                size: metadata.len(),
                target,
            }))
        }
        None => Ok(None),
    }
}

/// IFC models open in the 3D viewer; everything else goes to the plain
/// document viewer.
fn viewer_target(file_name: &str) -> ViewerTarget {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("ifc") => ViewerTarget::Viewer,
        _ => ViewerTarget::DocsViewer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ifc_files_open_in_the_model_viewer() {
        assert_eq!(viewer_target("site.ifc"), ViewerTarget::Viewer);
        assert_eq!(viewer_target("SITE.IFC"), ViewerTarget::Viewer);
    }

    #[test]
    fn everything_else_opens_in_the_document_viewer() {
        assert_eq!(viewer_target("drawing.pdf"), ViewerTarget::DocsViewer);
        assert_eq!(viewer_target("model.ifczip"), ViewerTarget::DocsViewer);
        assert_eq!(viewer_target("noextension"), ViewerTarget::DocsViewer);
    }
}
