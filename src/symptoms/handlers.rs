use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::repo::Symptom;
use crate::{
    auth::extractors::CurrentUser, error::AppError, pagination::Pagination, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/symptoms", post(create_symptom).get(list_symptoms))
}

#[derive(Debug, Deserialize)]
pub struct CreateSymptomRequest {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[instrument(skip(state, _user, payload))]
pub async fn create_symptom(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(payload): Json<CreateSymptomRequest>,
) -> Result<Json<Symptom>, AppError> {
    let symptom = match Symptom::create(
        &state.db,
        &payload.name,
        payload.category.as_deref(),
        payload.description.as_deref(),
    )
    .await
    {
        Ok(s) => s,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::Validation("Symptom already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(symptom_id = %symptom.id, name = %symptom.name, "symptom created");
    Ok(Json(symptom))
}

#[instrument(skip(state, _user))]
pub async fn list_symptoms(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Symptom>>, AppError> {
    let symptoms = Symptom::list(&state.db, p.limit, p.offset).await?;
    Ok(Json(symptoms))
}
