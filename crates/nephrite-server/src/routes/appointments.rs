use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use nephrite_core::models::appointment::Appointment;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.store.list_appointments().await?))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError> {
    Ok(Json(state.store.get_appointment(id).await?))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Appointment>, ApiError> {
    state.store.create_appointment(appointment.clone()).await?;
    Ok(Json(appointment))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut appointment): Json<Appointment>,
) -> Result<Json<Appointment>, ApiError> {
    appointment.id = id;
    state.store.update_appointment(appointment.clone()).await?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete_appointment(id).await?;
    Ok(Json(()))
}
