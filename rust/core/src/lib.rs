// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SodaBIM Core
//!
//! Element annotation and selection workflow for the SodaBIM model viewer.
//!
//! The 3D scene itself (rendering, ray casting, model parsing) lives behind
//! the [`ViewerAdapter`] capability trait; this crate owns everything that
//! happens *around* a pick:
//!
//! - **Annotation Store**: session-scoped comments keyed by element id,
//!   with trim and per-element dedup-by-text
//! - **Selection Correlator**: turns pick results into a coherent
//!   selection + modal workflow and resolves element display names
//! - **View Mode Controller**: gates pick handling on the active mode
//! - **Viewer Session**: single-threaded driver tying the pieces together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sodabim_core::{ViewerSession, ViewMode};
//!
//! let mut session = ViewerSession::new();
//! session.init(adapter);
//! session.set_view_mode(ViewMode::ElementView);
//!
//! session.handle_click().await;          // pick → select + open modal
//! session.set_comment_draft("needs paint");
//! session.submit_comment();              // stored under the picked element
//! ```

pub mod adapter;
pub mod error;
pub mod mode;
pub mod properties;
pub mod selection;
pub mod session;
pub mod store;

pub use adapter::{PickHit, ViewerAdapter};
pub use error::{Error, Result};
pub use mode::{ViewMode, ViewModeController};
pub use properties::{ElementId, ElementProperties, ModelId, UNKNOWN_ELEMENT_NAME};
pub use selection::{SelectionCorrelator, SelectionState};
pub use session::ViewerSession;
pub use store::{AnnotationStore, Comment};
