use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive numeric bounds for one form field, plus the granularity the
/// UI displays values at. `step` is a display hint only: validation
/// checks bounds, never multiples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRule {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The fields a prediction request requires, in declaration order. This
/// order decides which invalid field gets focus on a rejected submit and
/// the feature order on the wire.
pub const REQUIRED_FIELDS: &[&str] = &["gravity", "ph", "osmo", "cond", "urea", "calc"];

/// Look up the range rule for a field. Absence is a normal outcome, not
/// an error: fields without a rule are presence-checked only.
pub fn rule_for(field: &str) -> Option<FieldRule> {
    let rule = match field {
        "gravity" => FieldRule { min: 1.000, max: 1.050, step: 0.001 },
        "ph" => FieldRule { min: 0.0, max: 14.0, step: 0.01 },
        "osmo" => FieldRule { min: 0.0, max: 2000.0, step: 1.0 },
        "cond" => FieldRule { min: 0.0, max: 50.0, step: 0.1 },
        "urea" => FieldRule { min: 0.0, max: 1000.0, step: 1.0 },
        "calc" => FieldRule { min: 0.0, max: 20.0, step: 0.01 },
        _ => return None,
    };
    Some(rule)
}
