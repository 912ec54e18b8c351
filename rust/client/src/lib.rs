// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SodaBIM Client
//!
//! REST client for the SodaBIM backend: authentication, project listing
//! and project file management.
//!
//! [`ApiClient`] is an explicit session object. It owns the HTTP client
//! and the bearer token; construct one per signed-in session and drop it
//! on sign-out instead of keeping ambient global state.
//!
//! ```rust,ignore
//! use sodabim_client::{ApiClient, ApiConfig, LoginRequest};
//!
//! let mut api = ApiClient::new(ApiConfig::from_env())?;
//! let auth = api.login(&LoginRequest { login, password }).await?;
//! let projects = api.get_user_projects(auth.user_id).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ClientError;
pub use types::{
    ApiResponse, AuthResponse, CompanyRegistration, LoginRequest, Project, ProjectFile,
    RegisterRequest, RegistrationOutcome,
};
