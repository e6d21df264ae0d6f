use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims extracted from a session JWT.
#[derive(Debug, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub aud: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Validate an HS256 session token issued by the identity service.
///
/// The provider signs access tokens with the project's JWT secret and the
/// `authenticated` audience; expiry is enforced and any other role claim
/// is rejected.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["authenticated"]);
    validation.validate_exp = true;

    let key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let token_data = decode::<SessionClaims>(token, &key, &validation)?;

    if let Some(role) = token_data.claims.role.as_deref()
        && role != "authenticated"
    {
        return Err(AuthError::InvalidToken(format!("unexpected role: {role}")));
    }

    Ok(token_data.claims)
}
