use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use nephrite_auth::jwt::validate_token;

const SECRET: &str = "super-secret-signing-key";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    aud: &'a str,
    exp: u64,
    iat: u64,
    email: Option<&'a str>,
    role: Option<&'a str>,
}

fn claims(aud: &'static str, role: Option<&'static str>, exp: u64) -> TestClaims<'static> {
    TestClaims {
        sub: "user-123",
        aud,
        exp,
        iat: 1_700_000_000,
        email: Some("pat@example.test"),
        role,
    }
}

fn sign(claims: &TestClaims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("signing test claims cannot fail")
}

fn far_future() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs()
        + 3600
}

#[test]
fn accepts_a_well_formed_session_token() {
    let token = sign(&claims("authenticated", Some("authenticated"), far_future()));
    let parsed = validate_token(&token, SECRET).unwrap();
    assert_eq!(parsed.sub, "user-123");
    assert_eq!(parsed.email.as_deref(), Some("pat@example.test"));
}

#[test]
fn accepts_a_token_without_a_role_claim() {
    let token = sign(&claims("authenticated", None, far_future()));
    assert!(validate_token(&token, SECRET).is_ok());
}

#[test]
fn rejects_a_bad_signature() {
    let token = sign(&claims("authenticated", None, far_future()));
    assert!(validate_token(&token, "some-other-secret").is_err());
}

#[test]
fn rejects_an_expired_token() {
    let token = sign(&claims("authenticated", None, 1_700_000_100));
    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn rejects_a_foreign_audience() {
    let token = sign(&claims("anon", None, far_future()));
    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn rejects_an_unexpected_role() {
    let token = sign(&claims("authenticated", Some("service_role"), far_future()));
    assert!(validate_token(&token, SECRET).is_err());
}
