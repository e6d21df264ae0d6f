use std::time::Duration;

/// Handle to the hosted identity service. Holds the project base URL and
/// the public (anon) API key every request carries.
pub struct AuthClient {
    agent: ureq::Agent,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    /// `base_url` is the project root, e.g. `https://xyz.example.co`;
    /// trailing slashes are stripped.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(30))
            .build();
        let base_url = base_url.into();
        AuthClient {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub(crate) fn agent(&self) -> &ureq::Agent {
        &self.agent
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }
}
