//! The prediction endpoint: raw form text in, scored verdict out. Every
//! request runs the full submission gate, so nothing reaches the remote
//! scorer unless all required fields validate.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use nephrite_core::models::prediction::FeatureVector;
use nephrite_form::controller::{FormController, SubmissionResult, SubmitOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw field text as entered in the form. The client's own validation is
/// not trusted; values are sanitized and re-validated here.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub kidney_stone_present: bool,
    /// Model confidence, percent, two decimals.
    pub confidence: f64,
    pub features: FeatureVector,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let mut controller = FormController::new();
    for (field, raw) in &request.features {
        controller.edit(field, raw)?;
    }

    match controller.submit() {
        SubmitOutcome::Rejected { focus, message } => Err(ApiError::Validation {
            message: message.to_string(),
            focus,
        }),
        // The controller is fresh per request, so nothing can be in
        // flight at this point.
        SubmitOutcome::Pending => Err(ApiError::Internal("submission already pending".to_string())),
        SubmitOutcome::Accepted {
            submission,
            request: features,
        } => {
            info!(fields = features.entries.len(), "submission accepted, scoring");

            let predictor = Arc::clone(&state.predictor);
            let vector = features.clone();
            let result = tokio::task::spawn_blocking(move || predictor.predict(&vector))
                .await
                .map_err(|e| ApiError::Internal(format!("scoring task failed: {e}")))?;

            match result {
                Ok(prediction) => {
                    controller.resolve(submission, SubmissionResult::Completed(prediction.clone()));
                    Ok(Json(PredictResponse {
                        prediction: prediction.label,
                        kidney_stone_present: prediction.stone_present,
                        confidence: prediction.confidence_pct,
                        features,
                    }))
                }
                Err(e) => {
                    error!("scoring failed: {e}");
                    controller.resolve(submission, SubmissionResult::Failed(e.to_string()));
                    Err(ApiError::UpstreamFailed(
                        "Prediction failed. Please try again.".to_string(),
                    ))
                }
            }
        }
    }
}
