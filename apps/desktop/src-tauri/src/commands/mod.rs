// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tauri commands bridging the TypeScript frontend to the annotation core
//! and the backend API client.

pub mod auth;
pub mod file_dialog;
pub mod projects;
pub mod types;
pub mod view;
pub mod viewer;
