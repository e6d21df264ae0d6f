use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One named feature in a scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureEntry {
    pub name: String,
    pub value: f64,
}

/// An ordered feature assignment, as assembled by the submission gate and
/// handed to the remote scorer. Order is the form's declaration order and
/// is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureVector {
    pub entries: Vec<FeatureEntry>,
}

impl FeatureVector {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }
}

/// Outcome of one remote scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    /// Raw class label from the model (1 = stone present).
    pub label: i64,
    pub stone_present: bool,
    /// Model confidence as a percentage, rounded to two decimals.
    pub confidence_pct: f64,
}
