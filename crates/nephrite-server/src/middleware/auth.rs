use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Authenticated user extracted from a validated session token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
    pub email: Option<String>,
}

/// Session-token middleware for the record routes.
///
/// Extracts `Authorization: Bearer <token>`, validates it against the
/// configured JWT secret, and inserts [`AuthUser`] into request
/// extensions for handlers that want the caller's identity.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = nephrite_auth::jwt::validate_token(&token, &state.jwt_secret)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(AuthUser {
        sub: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}
