// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authentication commands.

use sodabim_client::{
    AuthResponse, CompanyRegistration, LoginRequest, RegisterRequest, RegistrationOutcome,
};

use crate::state::AppState;

/// Sign in and keep the bearer token on the API client.
#[tauri::command]
pub async fn login(
    state: tauri::State<'_, AppState>,
    credentials: LoginRequest,
) -> Result<AuthResponse, String> {
    let mut api = state.api.lock().await;
    api.login(&credentials).await.map_err(|e| e.to_string())
}

/// Create an account, optionally registering its company in a second step.
#[tauri::command]
pub async fn register(
    state: tauri::State<'_, AppState>,
    user: RegisterRequest,
    company: Option<CompanyRegistration>,
) -> Result<RegistrationOutcome, String> {
    let mut api = state.api.lock().await;
    api.register(&user, company.as_ref())
        .await
        .map_err(|e| e.to_string())
}

/// Drop the bearer token.
#[tauri::command]
pub async fn logout(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.api.lock().await.logout();
    Ok(())
}

/// Adopt a token the frontend persisted from an earlier run.
#[tauri::command]
pub async fn restore_session(
    state: tauri::State<'_, AppState>,
    token: String,
) -> Result<(), String> {
    state.api.lock().await.restore_token(token);
    Ok(())
}
