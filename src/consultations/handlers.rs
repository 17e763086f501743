use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{CreateConsultationRequest, UpdateConsultationRequest},
    repo::Consultation,
};
use crate::{
    auth::extractors::CurrentUser, doctors::repo::Doctor, error::AppError,
    pagination::Pagination, patients::repo::Patient, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/consultations",
            post(create_consultation).get(list_consultations),
        )
        .route(
            "/consultations/:id",
            get(get_consultation).patch(update_consultation),
        )
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_consultation(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateConsultationRequest>,
) -> Result<Json<Consultation>, AppError> {
    let patient = Patient::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("No patient profile for current user".into()))?;

    let consultation = Consultation::create(
        &state.db,
        patient.id,
        &payload.symptoms,
        &payload.description,
        &payload.priority,
    )
    .await?;

    info!(consultation_id = %consultation.id, "consultation created");
    Ok(Json(consultation))
}

/// Lists the caller's consultations: as a patient if they have a patient
/// profile, otherwise as a doctor.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_consultations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Consultation>>, AppError> {
    if let Some(patient) = Patient::find_by_user(&state.db, user.id).await? {
        let rows = Consultation::list_for_patient(&state.db, patient.id, p.limit, p.offset).await?;
        return Ok(Json(rows));
    }
    if let Some(doctor) = Doctor::find_by_user(&state.db, user.id).await? {
        let rows = Consultation::list_for_doctor(&state.db, doctor.id, p.limit, p.offset).await?;
        return Ok(Json(rows));
    }
    Ok(Json(Vec::new()))
}

#[instrument(skip(state, _user))]
pub async fn get_consultation(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Consultation>, AppError> {
    let consultation = Consultation::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Consultation"))?;
    Ok(Json(consultation))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_consultation(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateConsultationRequest>,
) -> Result<Json<Consultation>, AppError> {
    if let Some(doctor_id) = payload.doctor_id {
        // Assignment must point at an existing doctor.
        Doctor::find_by_id(&state.db, doctor_id)
            .await?
            .ok_or(AppError::NotFound("Doctor"))?;
    }

    let consultation = Consultation::update(
        &state.db,
        id,
        payload.doctor_id,
        payload.status.as_deref(),
        payload.doctor_notes.as_deref(),
    )
    .await?
    .ok_or(AppError::NotFound("Consultation"))?;

    info!(consultation_id = %consultation.id, status = %consultation.status, "consultation updated");
    Ok(Json(consultation))
}
