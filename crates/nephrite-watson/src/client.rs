//! Scoring calls against a deployed model.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::info;

use nephrite_core::models::prediction::{FeatureVector, Prediction};

use crate::config::WatsonConfig;
use crate::error::{PredictError, describe_http};
use crate::token::TokenSource;

/// Seam for the remote scoring service. The HTTP layer holds a
/// `dyn Predictor` so tests can substitute a stub for the live model.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError>;
}

pub struct WatsonPredictor {
    agent: ureq::Agent,
    deployment_url: String,
    tokens: TokenSource,
}

impl WatsonPredictor {
    pub fn new(config: WatsonConfig) -> Self {
        let agent = build_agent();
        let tokens = TokenSource::new(agent.clone(), config.iam_url, config.api_key);
        WatsonPredictor {
            agent,
            deployment_url: config.deployment_url,
            tokens,
        }
    }

    /// True when the service accepts our credentials (a token can be
    /// obtained). Used at startup to fail fast on bad config.
    pub fn test_connection(&self) -> bool {
        self.tokens.bearer().is_ok()
    }
}

impl Predictor for WatsonPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        let bearer = self.tokens.bearer()?;
        let payload = scoring_payload(features);

        let response = self
            .agent
            .post(&self.deployment_url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {bearer}"))
            .send_json(payload)
            .map_err(|e| PredictError::Scoring(describe_http(e)))?;
        let body: Value = response
            .into_json()
            .map_err(|e| PredictError::ResponseParse(e.to_string()))?;

        let prediction = parse_prediction(&body)?;
        info!(
            label = prediction.label,
            confidence = prediction.confidence_pct,
            "prediction completed"
        );
        Ok(prediction)
    }
}

fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(10))
        .timeout_read(Duration::from_secs(30))
        .timeout_write(Duration::from_secs(30))
        .build()
}

/// Build the scoring payload the deployment endpoint expects:
/// `{"input_data": [{"fields": [...], "values": [[...]]}]}`, fields and
/// values in the vector's order.
pub fn scoring_payload(features: &FeatureVector) -> Value {
    json!({
        "input_data": [{
            "fields": features.names(),
            "values": [features.values()],
        }]
    })
}

/// Interpret a scoring response. Accepts both shapes the service returns:
/// `{"predictions": [{"values": [[label, prob]]}]}` and a bare
/// `{"values": [[label, prob]]}`. Element 0 of the row is the class
/// label, element 1 the probability; a missing probability defaults to
/// 0.5.
pub fn parse_prediction(body: &Value) -> Result<Prediction, PredictError> {
    let row = body
        .get("predictions")
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("values"))
        .or_else(|| body.get("values"))
        .and_then(|v| v.get(0))
        .ok_or_else(|| {
            PredictError::ResponseParse("no prediction values in response".to_string())
        })?;

    let label = row
        .get(0)
        .and_then(Value::as_f64)
        .ok_or_else(|| PredictError::ResponseParse("prediction label is not numeric".to_string()))?
        as i64;
    let probability = row.get(1).and_then(Value::as_f64).unwrap_or(0.5);

    Ok(Prediction {
        label,
        stone_present: label == 1,
        confidence_pct: round2(probability * 100.0),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
