use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use nephrite_core::models::doctor::Doctor;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_doctors(State(state): State<AppState>) -> Result<Json<Vec<Doctor>>, ApiError> {
    Ok(Json(state.store.list_doctors().await?))
}

pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Doctor>, ApiError> {
    Ok(Json(state.store.get_doctor(id).await?))
}

pub async fn create_doctor(
    State(state): State<AppState>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Doctor>, ApiError> {
    state.store.create_doctor(doctor.clone()).await?;
    Ok(Json(doctor))
}

pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut doctor): Json<Doctor>,
) -> Result<Json<Doctor>, ApiError> {
    doctor.id = id;
    state.store.update_doctor(doctor.clone()).await?;
    Ok(Json(doctor))
}

pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete_doctor(id).await?;
    Ok(Json(()))
}
