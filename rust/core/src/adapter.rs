// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability contract for the external 3D viewer.
//!
//! Rendering, IFC parsing and ray casting are delegated entirely to the
//! viewer behind this trait; the core only ever sees element identities,
//! property bags and highlight requests.

use std::path::Path;

use crate::error::Result;
use crate::properties::{ElementId, ElementProperties, ModelId};

/// A successful pick: the element under the cursor and its properties.
#[derive(Debug, Clone)]
pub struct PickHit {
    /// Model the element belongs to.
    pub model: ModelId,
    /// Identity of the picked element.
    pub element: ElementId,
    /// Property bag reported by the viewer.
    pub properties: ElementProperties,
}

/// Operations the viewer must provide to the annotation workflow.
#[allow(async_fn_in_trait)]
pub trait ViewerAdapter {
    /// Ray-cast under the cursor. `None` is a miss, not an error.
    ///
    /// May take unbounded, model-dependent time; callers must not start a
    /// second pick while one is outstanding.
    async fn pick(&mut self) -> Option<PickHit>;

    /// Clear any pick highlight from the scene.
    fn unpick(&mut self);

    /// Visually mark an element, optionally scoped to one model.
    fn highlight(&mut self, element: ElementId, model: Option<ModelId>);

    /// Load a model file into the scene.
    async fn load_model(&mut self, path: &Path) -> Result<ModelId>;
}
