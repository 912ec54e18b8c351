// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the annotation core.
//!
//! Expected conditions (blank drafts, duplicate comment text, pick misses,
//! an uninitialized viewer) are silent no-ops and never reach this enum;
//! only genuine failures do.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The viewer could not load a model file.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// A property bag from the viewer carried no numeric `id` attribute.
    #[error("element properties are missing a numeric `id` attribute")]
    MissingId,
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
