use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::extract::State;

use nephrite_auth::client::AuthClient;
use nephrite_core::models::prediction::{FeatureVector, Prediction};
use nephrite_form::controller::REJECTION_MESSAGE;
use nephrite_server::error::ApiError;
use nephrite_server::routes;
use nephrite_server::state::AppState;
use nephrite_store::memory::MemoryStore;
use nephrite_watson::client::Predictor;
use nephrite_watson::error::PredictError;

/// Scoring stub: counts calls, returns a fixed outcome or a failure.
struct StubPredictor {
    calls: AtomicUsize,
    fail: bool,
}

impl StubPredictor {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(StubPredictor {
            calls: AtomicUsize::new(0),
            fail,
        })
    }
}

impl Predictor for StubPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PredictError::Scoring("HTTP 503".to_string()));
        }
        assert_eq!(features.entries.len(), 6, "gate must send every field");
        Ok(Prediction {
            label: 1,
            stone_present: true,
            confidence_pct: 85.0,
        })
    }
}

fn state_with(predictor: Arc<StubPredictor>) -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        predictor,
        auth: Arc::new(AuthClient::new("http://localhost:9999", "anon")),
        jwt_secret: "test-secret".to_string(),
    }
}

fn request(pairs: &[(&str, &str)]) -> routes::predict::PredictRequest {
    routes::predict::PredictRequest {
        features: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn complete_request() -> routes::predict::PredictRequest {
    request(&[
        ("gravity", "1.021"),
        ("ph", "4.91"),
        ("osmo", "725"),
        ("cond", "14.0"),
        ("urea", "443"),
        ("calc", "2.45"),
    ])
}

#[tokio::test]
async fn a_valid_submission_scores_exactly_once() {
    let predictor = StubPredictor::new(false);
    let state = state_with(Arc::clone(&predictor));

    let Json(response) = routes::predict::predict(State(state), Json(complete_request()))
        .await
        .unwrap();

    assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.prediction, 1);
    assert!(response.kidney_stone_present);
    assert_eq!(response.confidence, 85.0);
    assert_eq!(response.features.get("urea"), Some(443.0));
}

#[tokio::test]
async fn an_invalid_submission_never_reaches_the_predictor() {
    let predictor = StubPredictor::new(false);
    let state = state_with(Arc::clone(&predictor));

    // gravity is fine, ph is empty, the rest were never entered.
    let err = routes::predict::predict(
        State(state),
        Json(request(&[("gravity", "1.021"), ("ph", "")])),
    )
    .await
    .unwrap_err();

    match err {
        ApiError::Validation { message, focus } => {
            assert_eq!(message, REJECTION_MESSAGE);
            assert_eq!(focus, "ph");
        }
        other => panic!("expected a validation rejection, got {other:?}"),
    }
    assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn an_out_of_range_value_is_rejected() {
    let predictor = StubPredictor::new(false);
    let state = state_with(Arc::clone(&predictor));

    let mut req = complete_request();
    req.features.insert("ph".to_string(), "14.01".to_string());

    let err = routes::predict::predict(State(state), Json(req)).await.unwrap_err();
    match err {
        ApiError::Validation { focus, .. } => assert_eq!(focus, "ph"),
        other => panic!("expected a validation rejection, got {other:?}"),
    }
    assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn an_unknown_field_is_rejected_up_front() {
    let predictor = StubPredictor::new(false);
    let state = state_with(Arc::clone(&predictor));

    let mut req = complete_request();
    req.features.insert("specific_gravity".to_string(), "1.0".to_string());

    let err = routes::predict::predict(State(state), Json(req)).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn a_failing_scorer_maps_to_a_retryable_error() {
    let predictor = StubPredictor::new(true);
    let state = state_with(Arc::clone(&predictor));

    let err = routes::predict::predict(State(state), Json(complete_request()))
        .await
        .unwrap_err();

    match err {
        ApiError::UpstreamFailed(message) => {
            assert_eq!(message, "Prediction failed. Please try again.");
        }
        other => panic!("expected an upstream failure, got {other:?}"),
    }
    assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn raw_client_text_is_sanitized_before_validation() {
    let predictor = StubPredictor::new(false);
    let state = state_with(Arc::clone(&predictor));

    let mut req = complete_request();
    // A pasted value with stray characters still validates after the
    // sanitizer strips them.
    req.features.insert("calc".to_string(), "2a.4b5".to_string());

    let Json(response) = routes::predict::predict(State(state), Json(req)).await.unwrap();
    assert_eq!(response.features.get("calc"), Some(2.45));
}
