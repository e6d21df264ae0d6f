use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the attempt. The message is the provider's
    /// own and is surfaced to the user verbatim.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("identity provider error: {0}")]
    Provider(String),

    #[error("transport error: {0}")]
    Transport(String),
}
