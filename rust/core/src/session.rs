// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The viewing session: one viewer, one store, one selection.
//!
//! [`ViewerSession`] is the single-threaded driver for the whole workflow.
//! All mutation goes through `&mut self`, which is what guarantees at most
//! one pick in flight: a second click cannot be processed until the current
//! `handle_click` future has resolved.

use std::path::Path;

use crate::adapter::ViewerAdapter;
use crate::error::Result;
use crate::mode::{ViewMode, ViewModeController};
use crate::properties::{ElementId, ModelId};
use crate::selection::{SelectionCorrelator, SelectionState};
use crate::store::{AnnotationStore, Comment};

/// Owns the adapter, the annotation store and the selection workflow for
/// one viewing session.
///
/// Until [`init`](Self::init) provides an adapter, every viewer-facing
/// action is a silent no-op; the screens can wire their handlers before the
/// 3D scene finishes booting.
#[derive(Debug, Default)]
pub struct ViewerSession<A: ViewerAdapter> {
    adapter: Option<A>,
    store: AnnotationStore,
    correlator: SelectionCorrelator,
    mode: ViewModeController,
    active_model: Option<ModelId>,
}

impl<A: ViewerAdapter> ViewerSession<A> {
    /// Create a session with no adapter and an empty store.
    pub fn new() -> Self {
        Self {
            adapter: None,
            store: AnnotationStore::new(),
            correlator: SelectionCorrelator::new(),
            mode: ViewModeController::new(),
            active_model: None,
        }
    }

    /// Attach the viewer. Keeps an already-attached adapter (re-running the
    /// screen's mount hook must not rebuild the scene).
    pub fn init(&mut self, adapter: A) {
        if self.adapter.is_none() {
            self.adapter = Some(adapter);
        }
    }

    /// Whether a viewer is attached.
    pub fn is_initialized(&self) -> bool {
        self.adapter.is_some()
    }

    /// End the session: detach the adapter and drop all session state,
    /// comments included. Returns the adapter so the caller can dispose it.
    pub fn teardown(&mut self) -> Option<A> {
        self.correlator.reset();
        self.store.clear();
        self.active_model = None;
        self.adapter.take()
    }

    /// Load a model into the viewer and make it the active model.
    ///
    /// Returns `Ok(None)` when no viewer is attached yet.
    pub async fn load_model(&mut self, path: &Path) -> Result<Option<ModelId>> {
        let Some(adapter) = self.adapter.as_mut() else {
            return Ok(None);
        };
        let model = adapter.load_model(path).await?;
        tracing::info!(%model, path = %path.display(), "model loaded");
        self.active_model = Some(model);
        Ok(Some(model))
    }

    /// Process a click on the viewer surface.
    ///
    /// In `Normal` mode no pick is requested at all. In `ElementView` mode
    /// a hit selects the element and opens the comment modal; a miss clears
    /// the selection.
    pub async fn handle_click(&mut self) {
        if !self.mode.picking_enabled() {
            return;
        }
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };

        match adapter.pick().await {
            Some(hit) => self.correlator.select(hit.properties),
            None => self.clear_selection(),
        }
    }

    /// Un-pick in the viewer and drop selection, modal and draft.
    pub fn clear_selection(&mut self) {
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.unpick();
        }
        self.correlator.reset();
    }

    /// Closing the modal is the same as clearing the selection.
    pub fn close_modal(&mut self) {
        self.clear_selection();
    }

    /// Switch view mode. Entering `Normal` always clears the selection,
    /// whether or not anything is selected.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode.set(mode);
        if mode == ViewMode::Normal {
            self.clear_selection();
        }
    }

    /// The active view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.mode.mode()
    }

    /// Replace the comment draft.
    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.correlator.set_draft(text);
    }

    /// Save the drafted comment against the current selection.
    pub fn submit_comment(&mut self) {
        self.correlator.submit(&mut self.store);
    }

    /// Re-highlight the element a saved comment points at.
    ///
    /// Side effect only: the current selection and modal state are left
    /// exactly as they are.
    pub fn highlight_element(&mut self, element: ElementId) {
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.highlight(element, self.active_model);
        }
    }

    /// Comments saved for one element, oldest first.
    pub fn comments(&self, element: ElementId) -> &[Comment] {
        self.store.comments(element)
    }

    /// The annotation store, for listing every saved comment.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Selection state, modal flag and draft.
    pub fn correlator(&self) -> &SelectionCorrelator {
        &self.correlator
    }

    /// Shorthand for the current selection state.
    pub fn selection(&self) -> &SelectionState {
        self.correlator.state()
    }

    /// Model currently loaded in the viewer, if any.
    pub fn active_model(&self) -> Option<ModelId> {
        self.active_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::PickHit;
    use crate::error::Error;
    use crate::properties::ElementProperties;
    use serde_json::json;
    use std::collections::VecDeque;

    /// Adapter that replays a scripted sequence of pick results and records
    /// every viewer instruction it receives.
    #[derive(Debug, Default)]
    struct ScriptedViewer {
        picks: VecDeque<Option<PickHit>>,
        pick_requests: usize,
        unpicks: usize,
        highlights: Vec<(ElementId, Option<ModelId>)>,
        next_model: u32,
        fail_load: bool,
    }

    impl ScriptedViewer {
        fn with_picks(picks: Vec<Option<PickHit>>) -> Self {
            Self {
                picks: picks.into(),
                ..Self::default()
            }
        }
    }

    impl ViewerAdapter for ScriptedViewer {
        async fn pick(&mut self) -> Option<PickHit> {
            self.pick_requests += 1;
            self.picks.pop_front().flatten()
        }

        fn unpick(&mut self) {
            self.unpicks += 1;
        }

        fn highlight(&mut self, element: ElementId, model: Option<ModelId>) {
            self.highlights.push((element, model));
        }

        async fn load_model(&mut self, path: &Path) -> Result<ModelId> {
            if self.fail_load {
                return Err(Error::ModelLoad(format!("unreadable: {}", path.display())));
            }
            self.next_model += 1;
            Ok(ModelId(self.next_model))
        }
    }

    fn hit(id: u32, name: Option<&str>) -> Option<PickHit> {
        let mut value = json!({"id": id});
        if let Some(name) = name {
            value["Name"] = json!({"value": name});
        }
        Some(PickHit {
            model: ModelId(1),
            element: ElementId(id),
            properties: ElementProperties::from_value(value).unwrap(),
        })
    }

    #[tokio::test]
    async fn normal_mode_never_requests_a_pick() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![hit(42, Some("Wall-07"))]));

        session.handle_click().await;

        assert!(!session.selection().is_selected());
        assert!(!session.correlator().modal_open());
        assert_eq!(session.teardown().unwrap().pick_requests, 0);
    }

    #[tokio::test]
    async fn click_without_viewer_is_a_no_op() {
        let mut session: ViewerSession<ScriptedViewer> = ViewerSession::new();
        session.set_view_mode(ViewMode::ElementView);

        session.handle_click().await;

        assert!(!session.selection().is_selected());
    }

    #[tokio::test]
    async fn hit_selects_and_opens_modal_with_empty_draft() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![hit(42, Some("Wall-07"))]));
        session.set_view_mode(ViewMode::ElementView);
        session.set_comment_draft("stale text");

        session.handle_click().await;

        let selected = session.correlator().selected().unwrap();
        assert_eq!(selected.id(), ElementId(42));
        assert!(session.correlator().modal_open());
        assert_eq!(session.correlator().draft(), "");
    }

    #[tokio::test]
    async fn miss_clears_selection_and_unpicks() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![
            hit(42, Some("Wall-07")),
            None,
        ]));
        session.set_view_mode(ViewMode::ElementView);

        session.handle_click().await;
        assert!(session.selection().is_selected());

        session.handle_click().await;
        assert!(!session.selection().is_selected());
        assert!(!session.correlator().modal_open());

        let viewer = session.teardown().unwrap();
        assert_eq!(viewer.unpicks, 1);
    }

    #[tokio::test]
    async fn switching_to_normal_clears_selection_unconditionally() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![hit(42, Some("Wall-07"))]));
        session.set_view_mode(ViewMode::ElementView);
        session.handle_click().await;
        session.set_comment_draft("about to be lost");

        session.set_view_mode(ViewMode::Normal);

        assert!(!session.selection().is_selected());
        assert!(!session.correlator().modal_open());
        assert_eq!(session.correlator().draft(), "");

        // Even with nothing selected the switch still un-picks the viewer.
        session.set_view_mode(ViewMode::Normal);
        let viewer = session.teardown().unwrap();
        assert_eq!(viewer.unpicks, 2);
    }

    #[tokio::test]
    async fn highlight_leaves_selection_and_modal_untouched() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![hit(42, Some("Wall-07"))]));
        session.set_view_mode(ViewMode::ElementView);
        session.handle_click().await;

        session.highlight_element(ElementId(7));

        assert!(session.selection().is_selected());
        assert!(session.correlator().modal_open());
        let viewer = session.teardown().unwrap();
        assert_eq!(viewer.highlights, vec![(ElementId(7), None)]);
    }

    #[tokio::test]
    async fn highlight_is_scoped_to_the_active_model() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::default());
        let model = session
            .load_model(Path::new("plans/site.ifc"))
            .await
            .unwrap()
            .unwrap();

        session.highlight_element(ElementId(9));

        let viewer = session.teardown().unwrap();
        assert_eq!(viewer.highlights, vec![(ElementId(9), Some(model))]);
    }

    #[tokio::test]
    async fn load_model_without_viewer_is_a_no_op() {
        let mut session: ViewerSession<ScriptedViewer> = ViewerSession::new();
        let loaded = session.load_model(Path::new("plans/site.ifc")).await.unwrap();
        assert_eq!(loaded, None);
        assert_eq!(session.active_model(), None);
    }

    #[tokio::test]
    async fn load_failure_surfaces_and_keeps_previous_model() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer {
            fail_load: true,
            ..ScriptedViewer::default()
        });

        let err = session
            .load_model(Path::new("plans/broken.ifc"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelLoad(_)));
        assert_eq!(session.active_model(), None);
    }

    #[tokio::test]
    async fn teardown_discards_comments_and_detaches_viewer() {
        let mut session = ViewerSession::new();
        session.init(ScriptedViewer::with_picks(vec![hit(42, Some("Wall-07"))]));
        session.set_view_mode(ViewMode::ElementView);
        session.handle_click().await;
        session.set_comment_draft("needs paint");
        session.submit_comment();
        assert_eq!(session.comments(ElementId(42)).len(), 1);

        session.teardown();

        assert!(!session.is_initialized());
        assert!(session.store().is_empty());
        assert!(!session.selection().is_selected());

        // A fresh adapter starts a fresh session over the same struct.
        session.init(ScriptedViewer::default());
        assert!(session.comments(ElementId(42)).is_empty());
    }
}
