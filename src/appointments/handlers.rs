use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{CreateAppointmentRequest, UpdateAppointmentRequest},
    repo::Appointment,
};
use crate::{
    auth::extractors::CurrentUser, doctors::repo::Doctor, error::AppError,
    pagination::Pagination, patients::repo::Patient, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/appointments",
            post(create_appointment).get(list_appointments),
        )
        .route(
            "/appointments/:id",
            get(get_appointment).patch(update_appointment),
        )
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_appointment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let patient = Patient::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("No patient profile for current user".into()))?;

    Doctor::find_by_id(&state.db, payload.doctor_id)
        .await?
        .ok_or(AppError::NotFound("Doctor"))?;

    let appointment = Appointment::create(
        &state.db,
        patient.id,
        payload.doctor_id,
        payload.date,
        &payload.time,
        &payload.appointment_type,
        payload.location.as_deref(),
        payload.notes.as_deref(),
    )
    .await?;

    info!(appointment_id = %appointment.id, "appointment created");
    Ok(Json(appointment))
}

/// Lists the caller's appointments via their patient profile, falling back
/// to their doctor profile.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_appointments(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    if let Some(patient) = Patient::find_by_user(&state.db, user.id).await? {
        let rows = Appointment::list_for_patient(&state.db, patient.id, p.limit, p.offset).await?;
        return Ok(Json(rows));
    }
    if let Some(doctor) = Doctor::find_by_user(&state.db, user.id).await? {
        let rows = Appointment::list_for_doctor(&state.db, doctor.id, p.limit, p.offset).await?;
        return Ok(Json(rows));
    }
    Ok(Json(Vec::new()))
}

#[instrument(skip(state, _user))]
pub async fn get_appointment(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = Appointment::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Appointment"))?;
    Ok(Json(appointment))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_appointment(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = Appointment::update(
        &state.db,
        id,
        payload.status.as_deref(),
        payload.notes.as_deref(),
    )
    .await?
    .ok_or(AppError::NotFound("Appointment"))?;

    info!(appointment_id = %appointment.id, status = %appointment.status, "appointment updated");
    Ok(Json(appointment))
}
