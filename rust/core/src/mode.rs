// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View mode handling.
//!
//! In `Normal` mode clicks on the scene are plain navigation and no pick is
//! requested at all; only `ElementView` enables the selection workflow.

use serde::{Deserialize, Serialize};

/// Interaction mode of the viewer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Plain model navigation; picking disabled.
    #[default]
    Normal,
    /// Element inspection; clicks resolve to picks.
    ElementView,
}

/// Holds the current [`ViewMode`]. Re-enterable indefinitely.
#[derive(Debug, Default)]
pub struct ViewModeController {
    mode: ViewMode,
}

impl ViewModeController {
    /// Start in [`ViewMode::Normal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The active mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch modes. The caller is responsible for clearing the selection
    /// whenever the target mode is `Normal`.
    pub fn set(&mut self, mode: ViewMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "view mode changed");
        }
        self.mode = mode;
    }

    /// Whether pick events should be processed at all.
    pub fn picking_enabled(&self) -> bool {
        self.mode == ViewMode::ElementView
    }
}
