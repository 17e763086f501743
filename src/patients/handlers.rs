use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{dto::CreatePatientRequest, repo::Patient};
use crate::{
    auth::extractors::CurrentUser, error::AppError, pagination::Pagination, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/patients", post(create_patient).get(list_patients))
        .route("/patients/me", get(get_my_patient))
        .route("/patients/:id", get(get_patient))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_patient(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreatePatientRequest>,
) -> Result<Json<Patient>, AppError> {
    let patient = match Patient::create(
        &state.db,
        user.id,
        payload.date_of_birth,
        payload.gender.as_deref(),
        payload.phone.as_deref(),
        payload.address.as_deref(),
    )
    .await
    {
        Ok(p) => p,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::Validation("Patient profile already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(patient_id = %patient.id, "patient profile created");
    Ok(Json(patient))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_my_patient(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Patient>, AppError> {
    let patient = Patient::find_by_user(&state.db, user.id)
        .await?
        .ok_or(AppError::NotFound("Patient"))?;
    Ok(Json(patient))
}

#[instrument(skip(state, _user))]
pub async fn get_patient(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, AppError> {
    let patient = Patient::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Patient"))?;
    Ok(Json(patient))
}

#[instrument(skip(state, _user))]
pub async fn list_patients(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = Patient::list(&state.db, p.limit, p.offset).await?;
    Ok(Json(patients))
}
