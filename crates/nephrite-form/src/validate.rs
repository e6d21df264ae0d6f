use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::registry;

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum InvalidReason {
    #[error("value is required")]
    Empty,

    #[error("'{raw}' is not a number")]
    NotNumeric { raw: String },

    #[error("{value} is outside range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Validation outcome for one field. Always a verdict, never a thrown
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Verdict {
    Valid,
    Invalid { reason: InvalidReason },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Validate one raw field value. Empty (after trimming) is invalid for
/// every field; fields without a registered rule are presence-checked
/// only. Rule-bearing fields are re-parsed here even though the sanitizer
/// restricts what reaches them; the sanitizer is not a trusted
/// precondition. Bounds are inclusive.
pub fn validate(field: &str, raw: &str) -> Verdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Verdict::Invalid { reason: InvalidReason::Empty };
    }

    let Some(rule) = registry::rule_for(field) else {
        return Verdict::Valid;
    };

    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Verdict::Invalid {
                reason: InvalidReason::NotNumeric { raw: trimmed.to_string() },
            };
        }
    };

    if value < rule.min || value > rule.max {
        return Verdict::Invalid {
            reason: InvalidReason::OutOfRange { value, min: rule.min, max: rule.max },
        };
    }

    Verdict::Valid
}
