use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{CreateDoctorRequest, DoctorFilter},
    repo::Doctor,
};
use crate::{
    auth::extractors::CurrentUser, error::AppError, pagination::Pagination, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/doctors", post(create_doctor).get(list_doctors))
        .route("/doctors/:id", get(get_doctor))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_doctor(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateDoctorRequest>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = match Doctor::create(
        &state.db,
        user.id,
        payload.specialization.as_deref(),
        payload.license_number.as_deref(),
        payload.years_of_experience,
        payload.bio.as_deref(),
    )
    .await
    {
        Ok(d) => d,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::Validation("Doctor profile already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(doctor_id = %doctor.id, "doctor profile created");
    Ok(Json(doctor))
}

#[instrument(skip(state, _user))]
pub async fn get_doctor(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = Doctor::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Doctor"))?;
    Ok(Json(doctor))
}

#[instrument(skip(state, _user))]
pub async fn list_doctors(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(filter): Query<DoctorFilter>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctors = Doctor::list(
        &state.db,
        filter.specialization.as_deref(),
        p.limit,
        p.offset,
    )
    .await?;
    Ok(Json(doctors))
}
