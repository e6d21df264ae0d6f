//! Public form schema data: field constraints and sample profiles, as
//! the SPA renders them.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use nephrite_form::profiles;
use nephrite_form::registry::{self, FieldRule};

use crate::error::ApiError;

/// One field's constraints.
#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    #[serde(flatten)]
    pub rule: FieldRule,
}

pub async fn list_fields() -> Json<Vec<FieldInfo>> {
    let fields = registry::REQUIRED_FIELDS
        .iter()
        .copied()
        .filter_map(|name| registry::rule_for(name).map(|rule| FieldInfo { name, rule }))
        .collect();
    Json(fields)
}

pub async fn list_profiles() -> Json<Vec<&'static str>> {
    Json(profiles::PROFILE_NAMES.to_vec())
}

pub async fn get_profile(
    Path(name): Path<String>,
) -> Result<Json<BTreeMap<&'static str, f64>>, ApiError> {
    let values = profiles::profile(&name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown profile: {name}")))?;
    Ok(Json(values.iter().copied().collect()))
}
