// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session-scoped annotation storage.
//!
//! Comments live for exactly one viewing session: the store is created
//! empty, only ever grows through [`AnnotationStore::add_comment`], and is
//! dropped wholesale on teardown. There is no edit or delete.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::properties::ElementId;

/// A single free-text comment attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Trimmed comment text. Never empty.
    pub text: String,
    /// Display name of the element at the time the comment was saved.
    pub element_name: String,
    /// Element the comment is attached to.
    pub element_id: ElementId,
}

/// Comments per element, in insertion order.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: FxHashMap<ElementId, Vec<Comment>>,
}

impl AnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment under `element_id`.
    ///
    /// The text is trimmed first. Blank text and text that duplicates an
    /// existing comment on the same element are absorbed silently; a
    /// double-click on "save" must not produce two identical entries.
    pub fn add_comment(&mut self, element_id: ElementId, text: &str, element_name: &str) {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(%element_id, "ignoring blank comment");
            return;
        }

        let comments = self.entries.entry(element_id).or_default();
        if comments.iter().any(|c| c.text == text) {
            tracing::debug!(%element_id, "ignoring duplicate comment");
            return;
        }

        comments.push(Comment {
            text: text.to_string(),
            element_name: element_name.to_string(),
            element_id,
        });
    }

    /// Comments for one element, oldest first. Unknown ids read as empty.
    pub fn comments(&self, element_id: ElementId) -> &[Comment] {
        self.entries
            .get(&element_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every annotated element and its comments.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &[Comment])> {
        self.entries.iter().map(|(id, c)| (*id, c.as_slice()))
    }

    /// Total number of stored comments.
    pub fn comment_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether no comments have been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all comments. Only used when the session ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
