// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire types for the SodaBIM backend.
//!
//! Field casing matches the backend's JSON (camelCase). Most endpoints wrap
//! their payload in [`ApiResponse`]; the project-files listing sometimes
//! answers with a bare array instead, which [`FileListing`] normalizes.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Credentials for an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Fields for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub login: String,
    pub user_name: String,
    pub user_surname: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub company_position: String,
}

/// Company details registered in a second step after the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistration {
    pub company_name: String,
    pub company_position: String,
}

/// Successful authentication payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
}

/// Outcome of the (possibly two-step) registration flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOutcome {
    pub user_id: i64,
    pub token: Option<String>,
}

/// A project the user has access to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A file stored under a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: i64,
    pub file_name: String,
    /// Absent on legacy rows; callers group those under the project they
    /// queried.
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Standard response envelope used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into a `Result`.
    ///
    /// A successful envelope without a payload is a backend bug surfaced as
    /// [`ClientError::EmptyBody`]; a failure without a message gets a
    /// generic one.
    pub fn into_result(self) -> Result<T, ClientError> {
        if self.success {
            self.data.ok_or(ClientError::EmptyBody)
        } else {
            Err(ClientError::Api(
                self.error.unwrap_or_else(|| "unknown server error".into()),
            ))
        }
    }
}

/// The two shapes the project-files endpoint is known to answer with.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FileListing {
    Envelope(ApiResponse<Vec<ProjectFile>>),
    Bare(Vec<ProjectFile>),
}

impl FileListing {
    /// Collapse both shapes into a plain file list.
    pub(crate) fn normalize(self) -> Result<Vec<ProjectFile>, ClientError> {
        match self {
            FileListing::Bare(files) => Ok(files),
            FileListing::Envelope(envelope) => envelope.into_result(),
        }
    }
}
