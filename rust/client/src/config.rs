// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration loaded from environment variables.

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SODABIM_API_URL")
                .unwrap_or_else(|_| "http://localhost:5080/api".into()),
            request_timeout_secs: std::env::var("SODABIM_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
