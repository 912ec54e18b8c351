// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application state shared across commands.

use tokio::sync::Mutex;

use sodabim_client::ApiClient;
use sodabim_core::ViewerSession;

use crate::bridge::{LoadReply, PickReply, ReplySlot, WebviewViewer};
use crate::view_state::ViewState;

/// State managed by the Tauri runtime.
///
/// The viewing session is serialized behind one async mutex: a command that
/// is awaiting a webview round trip holds it, so a second click cannot
/// start another pick while one is outstanding. The reply slots live
/// outside that mutex so the frontend's answer commands never contend with
/// the command that is waiting on them.
pub struct AppState {
    pub session: Mutex<ViewerSession<WebviewViewer>>,
    pub api: Mutex<ApiClient>,
    pub view: std::sync::Mutex<ViewState>,
    pub picks: ReplySlot<PickReply>,
    pub loads: ReplySlot<LoadReply>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            session: Mutex::new(ViewerSession::new()),
            api: Mutex::new(api),
            view: std::sync::Mutex::new(ViewState::default()),
            picks: ReplySlot::new(),
            loads: ReplySlot::new(),
        }
    }
}
