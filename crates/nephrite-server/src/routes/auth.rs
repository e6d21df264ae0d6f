//! Identity proxy routes. The hosted provider does the real work; its
//! failure messages pass through to the client verbatim.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Deserialize;

use nephrite_auth::flows::{self, AuthUser, Session};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthUser>, ApiError> {
    let auth = Arc::clone(&state.auth);
    let user = tokio::task::spawn_blocking(move || {
        flows::sign_up(&auth, &request.email, &request.password)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("auth task failed: {e}")))??;
    Ok(Json(user))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<Session>, ApiError> {
    let auth = Arc::clone(&state.auth);
    let session = tokio::task::spawn_blocking(move || {
        flows::sign_in(&auth, &request.email, &request.password)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("auth task failed: {e}")))??;
    Ok(Json(session))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<Session>, ApiError> {
    let auth = Arc::clone(&state.auth);
    let session =
        tokio::task::spawn_blocking(move || flows::refresh(&auth, &request.refresh_token))
            .await
            .map_err(|e| ApiError::Internal(format!("auth task failed: {e}")))??;
    Ok(Json(session))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<()>, ApiError> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let auth = Arc::clone(&state.auth);
    tokio::task::spawn_blocking(move || flows::sign_out(&auth, &token))
        .await
        .map_err(|e| ApiError::Internal(format!("auth task failed: {e}")))??;
    Ok(Json(()))
}
