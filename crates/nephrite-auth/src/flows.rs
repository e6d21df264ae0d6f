//! Password-grant authentication flows against the identity service. A
//! signed-out state is simply the absence of a session; the provider's
//! failure messages pass through verbatim.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::AuthClient;
use crate::error::AuthError;

/// An authenticated session as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body shape the provider returns. Which field carries the
/// human-readable message varies by endpoint.
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Email + password sign-in (password grant).
pub fn sign_in(client: &AuthClient, email: &str, password: &str) -> Result<Session, AuthError> {
    info!(email = email, "signing in");
    let url = format!("{}/auth/v1/token?grant_type=password", client.base_url());
    post_session(
        client,
        &url,
        serde_json::json!({ "email": email, "password": password }),
    )
}

/// Exchange a refresh token for a fresh session.
pub fn refresh(client: &AuthClient, refresh_token: &str) -> Result<Session, AuthError> {
    let url = format!("{}/auth/v1/token?grant_type=refresh_token", client.base_url());
    post_session(
        client,
        &url,
        serde_json::json!({ "refresh_token": refresh_token }),
    )
}

/// Register a new account. Depending on provider settings the response is
/// either a full session (auto-confirm) or just the pending user record;
/// either way the created user is returned.
pub fn sign_up(client: &AuthClient, email: &str, password: &str) -> Result<AuthUser, AuthError> {
    info!(email = email, "signing up");
    let url = format!("{}/auth/v1/signup", client.base_url());
    let body = post_json(
        client,
        &url,
        serde_json::json!({ "email": email, "password": password }),
    )?;

    let user_value = if body.get("access_token").is_some() {
        body.get("user").cloned().unwrap_or(serde_json::Value::Null)
    } else {
        body
    };
    serde_json::from_value(user_value)
        .map_err(|e| AuthError::Provider(format!("malformed sign-up response: {e}")))
}

/// Revoke the session behind an access token.
pub fn sign_out(client: &AuthClient, access_token: &str) -> Result<(), AuthError> {
    let url = format!("{}/auth/v1/logout", client.base_url());
    client
        .agent()
        .post(&url)
        .set("apikey", client.anon_key())
        .set("Authorization", &format!("Bearer {access_token}"))
        .send_string("")
        .map_err(map_provider_error)?;
    Ok(())
}

fn post_session(
    client: &AuthClient,
    url: &str,
    payload: serde_json::Value,
) -> Result<Session, AuthError> {
    let body = post_json(client, url, payload)?;
    serde_json::from_value(body)
        .map_err(|e| AuthError::Provider(format!("malformed session response: {e}")))
}

fn post_json(
    client: &AuthClient,
    url: &str,
    payload: serde_json::Value,
) -> Result<serde_json::Value, AuthError> {
    let response = client
        .agent()
        .post(url)
        .set("apikey", client.anon_key())
        .set("Content-Type", "application/json")
        .send_json(payload)
        .map_err(map_provider_error)?;
    response
        .into_json()
        .map_err(|e| AuthError::Provider(format!("invalid response body: {e}")))
}

/// Status responses carry the user-facing message in the body; pass it
/// through verbatim. Anything below HTTP is a transport error.
fn map_provider_error(err: ureq::Error) -> AuthError {
    match err {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_json::<ProviderError>()
                .ok()
                .and_then(|e| e.error_description.or(e.msg).or(e.error))
                .unwrap_or_else(|| format!("HTTP {code}"));
            AuthError::AuthFailed(message)
        }
        ureq::Error::Transport(transport) => AuthError::Transport(transport.to_string()),
    }
}
