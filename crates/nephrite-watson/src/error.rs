use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("token request failed: {0}")]
    Token(String),

    #[error("scoring request failed: {0}")]
    Scoring(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Render a transport-layer failure without leaking response bodies into
/// logs; status errors keep only the code.
pub(crate) fn describe_http(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, _) => format!("HTTP {code}"),
        ureq::Error::Transport(transport) => transport.to_string(),
    }
}
