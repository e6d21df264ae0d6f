//! Live integration against a deployed Watson ML model.
//!
//! These tests call the real service and require `WATSON_API_KEY` and
//! `WATSON_DEPLOYMENT_URL` in the environment.
//!
//! Run with: `cargo test -p nephrite-watson --test live_scoring -- --ignored`

use nephrite_core::models::prediction::{FeatureEntry, FeatureVector};
use nephrite_watson::client::{Predictor, WatsonPredictor};
use nephrite_watson::config::WatsonConfig;

fn live_predictor() -> WatsonPredictor {
    let config = WatsonConfig::from_env().expect("WATSON_* env vars must be set");
    WatsonPredictor::new(config)
}

#[test]
#[ignore]
fn token_exchange_succeeds() {
    assert!(live_predictor().test_connection());
}

#[test]
#[ignore]
fn scores_the_sample_row() {
    let predictor = live_predictor();
    let sample = FeatureVector {
        entries: [
            ("gravity", 1.021),
            ("ph", 4.91),
            ("osmo", 725.0),
            ("cond", 14.0),
            ("urea", 443.0),
            ("calc", 2.45),
        ]
        .into_iter()
        .map(|(name, value)| FeatureEntry {
            name: name.to_string(),
            value,
        })
        .collect(),
    };

    let prediction = predictor.predict(&sample).expect("scoring should succeed");
    println!(
        "label={} stone_present={} confidence={}%",
        prediction.label, prediction.stone_present, prediction.confidence_pct
    );
    assert!(prediction.label == 0 || prediction.label == 1);
    assert!((0.0..=100.0).contains(&prediction.confidence_pct));
}
