//! The form controller: owns field values and verdicts, gates submission,
//! and scopes in-flight prediction requests so a stale response can never
//! land on newer state.
//!
//! The submit path is the state machine Idle → Validating → {Accepted,
//! Rejected} → Idle. Validating never outlives the `submit` call itself;
//! an accepted submission leaves the controller in an in-flight state
//! until `resolve` or `cancel_pending` returns it to Idle.

use serde::Serialize;
use ts_rs::TS;

use nephrite_core::models::prediction::{FeatureEntry, FeatureVector, Prediction};

use crate::error::FormError;
use crate::profiles;
use crate::registry::{self, REQUIRED_FIELDS};
use crate::sanitize::sanitize_numeric;
use crate::validate::{Verdict, validate};

/// The one aggregate message shown on a rejected submit.
pub const REJECTION_MESSAGE: &str = "Please correct the highlighted fields.";

/// Identifies one accepted submission. A resolution carrying any other id
/// is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionId(u64);

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All required fields valid; the request is ready for the remote
    /// scorer and the submit control is disabled until resolution.
    Accepted {
        submission: SubmissionId,
        request: FeatureVector,
    },
    /// At least one field invalid. `focus` is the first offender in
    /// declaration order; no external call was issued.
    Rejected {
        focus: String,
        message: &'static str,
    },
    /// A submission is already in flight; nothing was validated or sent.
    Pending,
}

/// What a prediction attempt came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Completed(Prediction),
    /// Generic failure notice; the form stays editable and resubmittable.
    Failed(String),
}

/// Whether a resolution was applied or ignored as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Discarded,
}

/// Per-field validity marker for the UI.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FieldValidity {
    pub name: String,
    pub valid: bool,
}

/// Snapshot of every required field's verdict plus the overall gate
/// answer. Never persisted; recomputed from stored verdicts on demand.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ValidityState {
    pub fields: Vec<FieldValidity>,
    pub form_valid: bool,
}

struct FieldState {
    name: &'static str,
    raw: String,
    verdict: Option<Verdict>,
}

/// Owns the entry form's state. One instance per form session; every
/// method is a synchronous transition driven by a discrete UI event.
pub struct FormController {
    fields: Vec<FieldState>,
    in_flight: Option<SubmissionId>,
    next_submission: u64,
    last_result: Option<SubmissionResult>,
}

impl FormController {
    pub fn new() -> Self {
        let fields = REQUIRED_FIELDS
            .iter()
            .copied()
            .map(|name| FieldState {
                name,
                raw: String::new(),
                verdict: None,
            })
            .collect();
        FormController {
            fields,
            in_flight: None,
            next_submission: 0,
            last_result: None,
        }
    }

    /// Store an edited value. Numeric (rule-bearing) fields are sanitized
    /// first; the field's stored verdict is cleared until the next blur
    /// or submit recomputes it.
    pub fn edit(&mut self, field: &str, raw: &str) -> Result<(), FormError> {
        let numeric = registry::rule_for(field).is_some();
        let state = self.field_mut(field)?;
        state.raw = if numeric { sanitize_numeric(raw) } else { raw.to_string() };
        state.verdict = None;
        Ok(())
    }

    /// Validate a single field, as on an input losing focus.
    pub fn blur(&mut self, field: &str) -> Result<Verdict, FormError> {
        let state = self.field_mut(field)?;
        let verdict = validate(state.name, &state.raw);
        state.verdict = Some(verdict.clone());
        Ok(verdict)
    }

    /// Bulk-assign a sample profile and re-validate the assigned fields.
    /// Fields the profile does not mention are left untouched. An unknown
    /// name changes nothing and is returned to the caller.
    pub fn apply_profile(&mut self, name: &str) -> Result<ValidityState, FormError> {
        let values =
            profiles::profile(name).ok_or_else(|| FormError::UnknownProfile(name.to_string()))?;

        for (field, value) in values {
            if let Some(state) = self.fields.iter_mut().find(|s| s.name == *field) {
                state.raw = match registry::rule_for(field) {
                    Some(rule) => format_with_step(*value, rule.step),
                    None => value.to_string(),
                };
                state.verdict = Some(validate(state.name, &state.raw));
            }
        }

        Ok(self.validity())
    }

    /// Run the submission gate: validate every required field in
    /// declaration order, then either reject with the first offender or
    /// accept and hand back the assembled feature vector.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight.is_some() {
            return SubmitOutcome::Pending;
        }

        let mut first_invalid = None;
        for state in &mut self.fields {
            let verdict = validate(state.name, &state.raw);
            if !verdict.is_valid() && first_invalid.is_none() {
                first_invalid = Some(state.name);
            }
            state.verdict = Some(verdict);
        }

        if let Some(focus) = first_invalid {
            return SubmitOutcome::Rejected {
                focus: focus.to_string(),
                message: REJECTION_MESSAGE,
            };
        }

        let entries = self
            .fields
            .iter()
            .map(|state| FeatureEntry {
                name: state.name.to_string(),
                // Every verdict is Valid here, so the raw text parses.
                value: state.raw.trim().parse().unwrap_or_default(),
            })
            .collect();

        let submission = SubmissionId(self.next_submission);
        self.next_submission += 1;
        self.in_flight = Some(submission);

        SubmitOutcome::Accepted {
            submission,
            request: FeatureVector { entries },
        }
    }

    /// Deliver the outcome of an accepted submission. Only the submission
    /// currently in flight can land; a superseded or cancelled one is
    /// discarded without touching any state.
    pub fn resolve(&mut self, submission: SubmissionId, result: SubmissionResult) -> Resolution {
        if self.in_flight != Some(submission) {
            return Resolution::Discarded;
        }
        self.in_flight = None;
        self.last_result = Some(result);
        Resolution::Applied
    }

    /// Abandon the in-flight submission, as on navigation away. The
    /// external call is not aborted; its result, if it arrives, is
    /// discarded by `resolve`.
    pub fn cancel_pending(&mut self) {
        self.in_flight = None;
    }

    /// False while a submission is in flight; the UI disables the
    /// submit control off this.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    pub fn raw_value(&self, field: &str) -> Option<&str> {
        self.fields.iter().find(|s| s.name == field).map(|s| s.raw.as_str())
    }

    /// Current validity snapshot. A field with no computed verdict yet
    /// counts as not-yet-valid.
    pub fn validity(&self) -> ValidityState {
        let fields: Vec<FieldValidity> = self
            .fields
            .iter()
            .map(|state| FieldValidity {
                name: state.name.to_string(),
                valid: state.verdict.as_ref().is_some_and(Verdict::is_valid),
            })
            .collect();
        let form_valid = fields.iter().all(|f| f.valid);
        ValidityState { fields, form_valid }
    }

    fn field_mut(&mut self, field: &str) -> Result<&mut FieldState, FormError> {
        self.fields
            .iter_mut()
            .find(|s| s.name == field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a profile value at the field's display granularity: a step of
/// 0.001 gives three decimals, a step of 1 gives none.
fn format_with_step(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    let mut s = step;
    while (s - s.round()).abs() > 1e-6 && decimals < 6 {
        s *= 10.0;
        decimals += 1;
    }
    format!("{value:.decimals$}")
}
