use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Credentials and endpoint for one deployed scoring model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatsonConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub deployment_url: String,
    #[serde(default = "default_iam_url")]
    pub iam_url: String,
}

fn default_iam_url() -> String {
    DEFAULT_IAM_URL.to_string()
}

impl WatsonConfig {
    /// Load from a JSON config file. Missing or empty required keys are
    /// named in the error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PredictError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PredictError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: WatsonConfig = serde_json::from_str(&contents).map_err(|e| {
            PredictError::Config(format!("invalid JSON in {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `WATSON_API_KEY`, `WATSON_DEPLOYMENT_URL`, and
    /// optionally `WATSON_IAM_URL`.
    pub fn from_env() -> Result<Self, PredictError> {
        let config = WatsonConfig {
            api_key: std::env::var("WATSON_API_KEY").unwrap_or_default(),
            deployment_url: std::env::var("WATSON_DEPLOYMENT_URL").unwrap_or_default(),
            iam_url: std::env::var("WATSON_IAM_URL").unwrap_or_else(|_| default_iam_url()),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), PredictError> {
        let required = [
            ("api_key", &self.api_key),
            ("deployment_url", &self.deployment_url),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(PredictError::Config(format!(
                    "missing required configuration key: {key}"
                )));
            }
        }
        Ok(())
    }
}
