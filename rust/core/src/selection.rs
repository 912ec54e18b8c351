// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection state and the comment modal it backs.
//!
//! The correlator owns three tightly coupled pieces: which element is
//! selected, whether the comment modal is open, and the comment text being
//! drafted. The modal flag is derived state with its own reset rules, so it
//! lives here rather than with the presentation layer.

use crate::properties::ElementProperties;
use crate::store::AnnotationStore;

/// Current selection.
#[derive(Debug, Clone, Default)]
pub enum SelectionState {
    /// Nothing selected; the modal is closed.
    #[default]
    NoSelection,
    /// One element selected, with the properties captured at pick time.
    Selected(ElementProperties),
}

impl SelectionState {
    /// Whether an element is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::Selected(_))
    }
}

/// Mediates between pick results and the annotation store.
#[derive(Debug, Default)]
pub struct SelectionCorrelator {
    state: SelectionState,
    modal_open: bool,
    draft: String,
}

impl SelectionCorrelator {
    /// Start with no selection, modal closed, empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The selected element's properties, if any.
    pub fn selected(&self) -> Option<&ElementProperties> {
        match &self.state {
            SelectionState::Selected(properties) => Some(properties),
            SelectionState::NoSelection => None,
        }
    }

    /// Whether the comment modal is open.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// The comment text currently being drafted.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the comment draft (textarea contents).
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// A pick resolved to an element: select it and open the modal.
    ///
    /// The draft is always discarded first so text typed for the previous
    /// element cannot leak onto the new one.
    pub fn select(&mut self, properties: ElementProperties) {
        tracing::debug!(element = %properties.id(), "element selected");
        self.draft.clear();
        self.state = SelectionState::Selected(properties);
        self.modal_open = true;
    }

    /// Back to no selection: modal closed, draft cleared.
    ///
    /// The caller is responsible for telling the viewer to un-pick.
    pub fn reset(&mut self) {
        self.state = SelectionState::NoSelection;
        self.modal_open = false;
        self.draft.clear();
    }

    /// Save the drafted comment against the current selection.
    ///
    /// No-op without a selection. A draft that trims to nothing is left
    /// untouched (no intent to comment). Otherwise the element identity and
    /// display name are resolved here, at submit time, and the draft is
    /// cleared; selection and modal state stay as they are so the updated
    /// comment list remains visible.
    pub fn submit(&mut self, store: &mut AnnotationStore) {
        let SelectionState::Selected(properties) = &self.state else {
            return;
        };
        if self.draft.trim().is_empty() {
            return;
        }

        let element_id = properties.id();
        let element_name = properties.display_name().to_string();
        store.add_comment(element_id, &self.draft, &element_name);
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{ElementId, ElementProperties, UNKNOWN_ELEMENT_NAME};
    use serde_json::json;

    fn wall() -> ElementProperties {
        ElementProperties::from_value(json!({"id": 42, "Name": {"value": "Wall-07"}})).unwrap()
    }

    #[test]
    fn select_opens_modal_and_discards_stale_draft() {
        let mut correlator = SelectionCorrelator::new();
        correlator.set_draft("half-typed note");

        correlator.select(wall());

        assert!(correlator.state().is_selected());
        assert!(correlator.modal_open());
        assert_eq!(correlator.draft(), "");
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut correlator = SelectionCorrelator::new();
        let mut store = AnnotationStore::new();
        correlator.set_draft("orphan note");

        correlator.submit(&mut store);

        assert!(store.is_empty());
        assert_eq!(correlator.draft(), "orphan note");
    }

    #[test]
    fn submit_stores_and_clears_draft_but_keeps_modal() {
        let mut correlator = SelectionCorrelator::new();
        let mut store = AnnotationStore::new();
        correlator.select(wall());
        correlator.set_draft("needs paint");

        correlator.submit(&mut store);

        let comments = store.comments(ElementId(42));
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "needs paint");
        assert_eq!(comments[0].element_name, "Wall-07");
        assert_eq!(comments[0].element_id, ElementId(42));

        assert_eq!(correlator.draft(), "");
        assert!(correlator.modal_open());
        assert!(correlator.state().is_selected());
    }

    #[test]
    fn blank_draft_is_rejected_without_side_effects() {
        let mut correlator = SelectionCorrelator::new();
        let mut store = AnnotationStore::new();
        correlator.select(wall());
        correlator.set_draft("   ");

        correlator.submit(&mut store);

        assert!(store.is_empty());
        // The untouched draft mirrors the textarea still holding whitespace.
        assert_eq!(correlator.draft(), "   ");
        assert!(correlator.modal_open());
    }

    #[test]
    fn missing_name_falls_back_to_unknown_element() {
        let mut correlator = SelectionCorrelator::new();
        let mut store = AnnotationStore::new();
        correlator.select(ElementProperties::from_value(json!({"id": 7})).unwrap());
        correlator.set_draft("check bolt");

        correlator.submit(&mut store);

        assert_eq!(
            store.comments(ElementId(7))[0].element_name,
            UNKNOWN_ELEMENT_NAME
        );
    }

    #[test]
    fn reset_closes_modal_and_clears_everything() {
        let mut correlator = SelectionCorrelator::new();
        correlator.select(wall());
        correlator.set_draft("pending");

        correlator.reset();

        assert!(!correlator.state().is_selected());
        assert!(!correlator.modal_open());
        assert_eq!(correlator.draft(), "");
    }
}
