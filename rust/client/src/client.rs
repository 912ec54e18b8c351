// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The SodaBIM backend client.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::types::{
    ApiResponse, AuthResponse, CompanyRegistration, FileListing, LoginRequest, Project,
    ProjectFile, RegisterRequest, RegistrationOutcome,
};

/// REST client for the SodaBIM backend.
///
/// One instance per signed-in session. The bearer token obtained by
/// [`login`](Self::login) or [`register`](Self::register) is attached to
/// every subsequent request until [`logout`](Self::logout).
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
            http,
        })
    }

    /// Whether a bearer token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a token persisted by an earlier session.
    pub fn restore_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// Authenticate and store the bearer token.
    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        tracing::debug!(login = %credentials.login, "logging in");

        let response = self
            .request(Method::POST, "/Auth/login")
            .json(credentials)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse_envelope(response).await?;

        self.token = Some(auth.token.clone());
        tracing::info!(user_id = auth.user_id, "login succeeded");
        Ok(auth)
    }

    /// Register a user account, optionally followed by its company.
    ///
    /// The account registration yields the token used for the company step,
    /// so a half-completed flow still leaves the client signed in.
    pub async fn register(
        &mut self,
        user: &RegisterRequest,
        company: Option<&CompanyRegistration>,
    ) -> Result<RegistrationOutcome, ClientError> {
        tracing::debug!(login = %user.login, with_company = company.is_some(), "registering");

        let response = self
            .request(Method::POST, "/auth/register")
            .json(user)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse_envelope(response).await?;
        self.token = Some(auth.token.clone());

        let Some(company) = company else {
            return Ok(RegistrationOutcome {
                user_id: auth.user_id,
                token: Some(auth.token),
            });
        };

        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct CompanyAccount {
            user_id: i64,
        }

        let response = self
            .request(Method::POST, "/company/register")
            .json(company)
            .send()
            .await?;
        let account: CompanyAccount = Self::parse_envelope(response).await?;

        Ok(RegistrationOutcome {
            user_id: account.user_id,
            token: Some(auth.token),
        })
    }

    /// Projects visible to a user.
    pub async fn get_user_projects(&self, user_id: i64) -> Result<Vec<Project>, ClientError> {
        tracing::debug!(user_id, "fetching projects");

        let response = self
            .request(Method::GET, &format!("/Project?userId={user_id}"))
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    /// Files stored under one project.
    ///
    /// The endpoint answers with either the standard envelope or a bare
    /// array; both are accepted. Anything else is an unexpected format.
    pub async fn get_user_project_files(
        &self,
        user_id: i64,
        project_id: i64,
    ) -> Result<Vec<ProjectFile>, ClientError> {
        tracing::debug!(user_id, project_id, "fetching project files");

        let response = self
            .request(
                Method::GET,
                &format!("/Project/{project_id}/files?userId={user_id}"),
            )
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body: serde_json::Value = response.json().await?;
        serde_json::from_value::<FileListing>(body)
            .map_err(|_| ClientError::UnexpectedFormat)?
            .normalize()
    }

    /// Upload a file into a project.
    pub async fn upload_project_file(
        &self,
        project_id: i64,
        user_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProjectFile, ClientError> {
        tracing::debug!(project_id, user_id, file_name, size = bytes.len(), "uploading file");

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
            )
            .text("userId", user_id.to_string());

        let response = self
            .request(Method::POST, &format!("/Project/{project_id}/files"))
            .multipart(form)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    /// Resolve a download URL for a stored file.
    pub async fn download_file(&self, file_id: i64) -> Result<String, ClientError> {
        tracing::debug!(file_id, "requesting file download");

        let response = self
            .request(Method::GET, &format!("/ProjectFile/{file_id}/download"))
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    /// Build a request against the API, with the bearer token when held.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Join a path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Map error statuses before touching the body.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::CONFLICT => Err(ClientError::AlreadyRegistered),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::Api(format!(
                    "server returned {status}: {body}"
                )))
            }
            _ => Ok(response),
        }
    }

    /// Check the status, then unwrap the standard response envelope.
    async fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check_status(response).await?;
        let envelope: ApiResponse<T> = response.json().await?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: base_url.into(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn url_joining_tolerates_stray_slashes() {
        let api = client("http://localhost:5080/api/");
        assert_eq!(
            api.url("/Auth/login"),
            "http://localhost:5080/api/Auth/login"
        );
        assert_eq!(
            api.url("Project?userId=3"),
            "http://localhost:5080/api/Project?userId=3"
        );
    }

    #[test]
    fn token_lifecycle() {
        let mut api = client("http://localhost:5080/api");
        assert!(!api.is_authenticated());

        api.restore_token("stored-token");
        assert!(api.is_authenticated());

        api.logout();
        assert!(!api.is_authenticated());
    }
}
