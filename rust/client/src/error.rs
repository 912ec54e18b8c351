// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the API client.

use thiserror::Error;

/// API client error.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, timeout, body decoding).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401 from the backend.
    #[error("unauthorized access, please check your credentials")]
    Unauthorized,

    /// HTTP 409 during registration.
    #[error("a user with this email is already registered")]
    AlreadyRegistered,

    /// The backend reported success but sent no payload.
    #[error("server returned an empty response")]
    EmptyBody,

    /// The backend answered with a shape the client does not understand.
    #[error("unexpected response format from server")]
    UnexpectedFormat,

    /// Error message carried in the backend's response envelope.
    #[error("{0}")]
    Api(String),
}
