// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge between the annotation session and the 3D scene in the webview.
//!
//! The scene (rendering, ray casting, model parsing) runs in the frontend.
//! [`WebviewViewer`] implements the core's viewer contract by emitting
//! window events; round-trip operations (pick, model load) park on a
//! [`ReplySlot`] until the frontend answers through the matching command.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;
use tauri::{AppHandle, Emitter};
use tokio::sync::oneshot;

use sodabim_core::{ElementId, ElementProperties, Error, ModelId, PickHit, Result, ViewerAdapter};

use crate::commands::types::PickHitDto;

/// Answer to a pick request: the hit, or `None` for a miss.
pub type PickReply = Option<PickHitDto>;

/// Answer to a model-load request: the model id, or the failure message.
pub type LoadReply = std::result::Result<u32, String>;

/// Single-slot reply channel for one outstanding webview round trip.
///
/// Arming the slot replaces any previous sender, so a reply belonging to a
/// superseded or torn-down exchange finds no receiver and is discarded.
pub struct ReplySlot<T> {
    inner: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> ReplySlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Prepare to receive one reply, cancelling any pending exchange.
    pub fn arm(&self) -> oneshot::Receiver<T> {
        let (tx, rx) = oneshot::channel();
        *self.inner.lock().unwrap() = Some(tx);
        rx
    }

    /// Deliver the reply. Returns false when nothing was waiting (a stale
    /// or duplicate delivery), in which case the value is dropped.
    pub fn fulfill(&self, value: T) -> bool {
        match self.inner.lock().unwrap().take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }
}

impl<T> Clone for ReplySlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ReplySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct HighlightEvent {
    element_id: u32,
    model_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoadModelEvent {
    path: String,
}

/// Viewer adapter backed by the 3D scene in the webview.
pub struct WebviewViewer {
    app: AppHandle,
    picks: ReplySlot<PickReply>,
    loads: ReplySlot<LoadReply>,
}

impl WebviewViewer {
    pub fn new(app: AppHandle, picks: ReplySlot<PickReply>, loads: ReplySlot<LoadReply>) -> Self {
        Self { app, picks, loads }
    }
}

impl ViewerAdapter for WebviewViewer {
    async fn pick(&mut self) -> Option<PickHit> {
        let reply = self.picks.arm();
        if let Err(err) = self.app.emit("viewer:pick-request", ()) {
            log::warn!("failed to request a pick from the scene: {err}");
            return None;
        }

        match reply.await {
            Ok(Some(dto)) => Some(dto.into_hit()),
            // Miss, or the exchange was superseded before an answer came.
            Ok(None) | Err(_) => None,
        }
    }

    fn unpick(&mut self) {
        if let Err(err) = self.app.emit("viewer:unpick", ()) {
            log::warn!("failed to clear the scene highlight: {err}");
        }
    }

    fn highlight(&mut self, element: ElementId, model: Option<ModelId>) {
        let event = HighlightEvent {
            element_id: element.0,
            model_id: model.map(|m| m.0),
        };
        if let Err(err) = self.app.emit("viewer:highlight", event) {
            log::warn!("failed to highlight element {element}: {err}");
        }
    }

    async fn load_model(&mut self, path: &Path) -> Result<ModelId> {
        let reply = self.loads.arm();
        let event = LoadModelEvent {
            path: path.display().to_string(),
        };
        self.app
            .emit("viewer:load-model", event)
            .map_err(|err| Error::ModelLoad(err.to_string()))?;

        match reply.await {
            Ok(Ok(model_id)) => Ok(ModelId(model_id)),
            Ok(Err(message)) => Err(Error::ModelLoad(message)),
            Err(_) => Err(Error::ModelLoad("viewer disposed while loading".into())),
        }
    }
}

impl PickHitDto {
    /// Convert the frontend's pick payload into the core representation.
    ///
    /// The property bag is taken as-is when it is an object; the element id
    /// from the hit always wins over whatever the bag claims.
    pub fn into_hit(self) -> PickHit {
        let attributes = match self.properties {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        let element = ElementId(self.element_id);
        PickHit {
            model: ModelId(self.model_id),
            element,
            properties: ElementProperties::from_object(element, attributes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fulfill_without_a_waiter_reports_stale() {
        let slot: ReplySlot<PickReply> = ReplySlot::new();
        assert!(!slot.fulfill(None));
    }

    #[test]
    fn armed_slot_receives_exactly_one_reply() {
        let slot: ReplySlot<LoadReply> = ReplySlot::new();
        let rx = slot.arm();

        assert!(slot.fulfill(Ok(5)));
        assert!(!slot.fulfill(Ok(6)), "second delivery must be dropped");
        assert_eq!(rx.blocking_recv().unwrap(), Ok(5));
    }

    #[test]
    fn rearming_cancels_the_previous_exchange() {
        let slot: ReplySlot<LoadReply> = ReplySlot::new();
        let stale = slot.arm();
        let fresh = slot.arm();

        assert!(slot.fulfill(Ok(7)));
        assert!(stale.blocking_recv().is_err(), "stale receiver was cancelled");
        assert_eq!(fresh.blocking_recv().unwrap(), Ok(7));
    }

    #[test]
    fn pick_dto_keeps_the_hit_id_over_the_bag() {
        let dto = PickHitDto {
            model_id: 1,
            element_id: 42,
            properties: json!({"id": 999, "Name": {"value": "Wall-07"}}),
        };

        let hit = dto.into_hit();
        assert_eq!(hit.element, ElementId(42));
        assert_eq!(hit.properties.id(), ElementId(42));
        assert_eq!(hit.properties.name(), Some("Wall-07"));
    }

    #[test]
    fn pick_dto_tolerates_a_non_object_bag() {
        let dto = PickHitDto {
            model_id: 1,
            element_id: 8,
            properties: json!(null),
        };

        let hit = dto.into_hit();
        assert_eq!(hit.properties.id(), ElementId(8));
        assert_eq!(hit.properties.name(), None);
    }
}
