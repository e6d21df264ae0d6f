use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use nephrite_core::models::patient::Patient;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.store.list_patients().await?))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.store.get_patient(id).await?))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    state.store.create_patient(patient.clone()).await?;
    Ok(Json(patient))
}

pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    patient.id = id;
    state.store.update_patient(patient.clone()).await?;
    Ok(Json(patient))
}

pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete_patient(id).await?;
    Ok(Json(()))
}
