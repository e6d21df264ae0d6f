//! IBM Cloud IAM token exchange. Tokens are cached and reused until
//! shortly before expiry.

use std::sync::Mutex;

use jiff::Timestamp;
use serde::Deserialize;
use tracing::info;

use crate::error::{PredictError, describe_http};

/// Grant type IAM expects for API-key exchange.
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Refresh this many seconds before the token actually expires.
const EXPIRY_SLACK_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Clone)]
struct CachedToken {
    bearer: String,
    expires_at: Timestamp,
}

/// Exchanges an API key for bearer tokens, caching across calls. Safe to
/// share behind an `Arc`; the cache is interior-mutable.
pub struct TokenSource {
    agent: ureq::Agent,
    iam_url: String,
    api_key: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(agent: ureq::Agent, iam_url: String, api_key: String) -> Self {
        TokenSource {
            agent,
            iam_url,
            api_key,
            cached: Mutex::new(None),
        }
    }

    /// A bearer token valid for at least [`EXPIRY_SLACK_SECS`] more
    /// seconds, fetched anew only when the cached one has run out.
    pub fn bearer(&self) -> Result<String, PredictError> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| PredictError::Token("token cache poisoned".to_string()))?;

        if let Some(token) = cached.as_ref()
            && Timestamp::now() < token.expires_at
        {
            return Ok(token.bearer.clone());
        }

        let response = self
            .agent
            .post(&self.iam_url)
            .send_form(&[("apikey", self.api_key.as_str()), ("grant_type", GRANT_TYPE)])
            .map_err(|e| PredictError::Token(describe_http(e)))?;
        let parsed: IamTokenResponse = response
            .into_json()
            .map_err(|e| PredictError::Token(format!("invalid token response: {e}")))?;

        let now = Timestamp::now();
        let expires_at =
            Timestamp::from_second(now.as_second() + parsed.expires_in - EXPIRY_SLACK_SECS)
                .map_err(|e| PredictError::Token(format!("implausible token expiry: {e}")))?;

        info!("obtained IAM access token");
        let token = CachedToken {
            bearer: parsed.access_token,
            expires_at,
        };
        *cached = Some(token.clone());
        Ok(token.bearer)
    }
}
