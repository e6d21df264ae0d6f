//! Connectivity smoke check against a live deployment: obtains a token
//! and scores the dataset's sample row.
//!
//! Run with:
//! `WATSON_API_KEY=... WATSON_DEPLOYMENT_URL=... cargo run -p nephrite-watson --example score_sample`

use nephrite_core::models::prediction::{FeatureEntry, FeatureVector};
use nephrite_watson::client::{Predictor, WatsonPredictor};
use nephrite_watson::config::WatsonConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => WatsonConfig::from_file(path)?,
        None => WatsonConfig::from_env()?,
    };
    let predictor = WatsonPredictor::new(config);

    if !predictor.test_connection() {
        eprintln!("failed to obtain an IAM token; check the API key");
        std::process::exit(1);
    }
    println!("connected to Watson ML");

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

    let prediction = predictor.predict(&sample)?;
    println!(
        "label={} stone_present={} confidence={}%",
        prediction.label, prediction.stone_present, prediction.confidence_pct
    );
    Ok(())
}
