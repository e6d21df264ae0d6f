use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nephrite_auth::error::AuthError;
use nephrite_form::error::FormError;
use nephrite_store::error::StoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// A submission failed the gate. `focus` is the field the UI should
    /// highlight and focus.
    Validation { message: String, focus: String },
    /// The remote scoring service failed; the client may resubmit.
    UpstreamFailed(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    focus: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, focus) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Validation { message, focus } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Some(focus))
            }
            ApiError::UpstreamFailed(msg) => (StatusCode::BAD_GATEWAY, msg, None),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, focus })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => ApiError::NotFound(format!("record not found: {id}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::UnknownProfile(_) => ApiError::NotFound(e.to_string()),
            FormError::UnknownField(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::AuthFailed(msg) => ApiError::Unauthorized(msg),
            AuthError::InvalidToken(_) | AuthError::Jwt(_) => {
                ApiError::Unauthorized(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
