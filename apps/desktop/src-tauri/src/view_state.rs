// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation-only state: theme and the draggable comment modal.
//!
//! Nothing here touches the annotation core; selection and comments do not
//! care where the modal sits or which theme is active.

use serde::{Deserialize, Serialize};

/// Color theme of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) -> Theme {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        *self
    }
}

/// Screen position of the comment modal plus an in-progress drag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalPlacement {
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    drag: Option<DragOrigin>,
}

/// Offset between the cursor and the modal corner, captured on drag start.
#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    offset_x: f64,
    offset_y: f64,
}

impl Default for ModalPlacement {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            drag: None,
        }
    }
}

impl ModalPlacement {
    /// Begin dragging from the given cursor position.
    pub fn begin_drag(&mut self, cursor_x: f64, cursor_y: f64) {
        self.drag = Some(DragOrigin {
            offset_x: cursor_x - self.x,
            offset_y: cursor_y - self.y,
        });
    }

    /// Follow the cursor. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, cursor_x: f64, cursor_y: f64) {
        if let Some(origin) = self.drag {
            self.x = cursor_x - origin.offset_x;
            self.y = cursor_y - origin.offset_y;
        }
    }

    /// Finish the drag, keeping the current position.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// All presentation state, serialized to the frontend in one piece.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub theme: Theme,
    pub modal: ModalPlacement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_back_and_forth() {
        let mut theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
    }

    #[test]
    fn drag_keeps_the_grab_point_under_the_cursor() {
        let mut modal = ModalPlacement::default();

        // Grab the header 20x10 inside the corner and move the cursor.
        modal.begin_drag(120.0, 110.0);
        modal.drag_to(300.0, 200.0);

        assert_eq!((modal.x, modal.y), (280.0, 190.0));
        assert!(modal.is_dragging());
    }

    #[test]
    fn movement_without_a_drag_is_ignored() {
        let mut modal = ModalPlacement::default();
        modal.drag_to(500.0, 500.0);
        assert_eq!((modal.x, modal.y), (100.0, 100.0));

        modal.begin_drag(100.0, 100.0);
        modal.end_drag();
        modal.drag_to(500.0, 500.0);
        assert_eq!((modal.x, modal.y), (100.0, 100.0));
    }
}
