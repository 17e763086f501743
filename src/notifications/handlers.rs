use axum::{
    extract::{Path, Query, State},
    routing::{patch, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use super::repo::Notification;
use crate::{
    auth::extractors::CurrentUser, error::AppError, pagination::Pagination, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(create_notification).get(list_notifications),
        )
        .route("/notifications/:id/read", patch(mark_notification_read))
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub link: Option<String>,
}

#[instrument(skip(state, _user, payload))]
pub async fn create_notification(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<Json<Notification>, AppError> {
    let notification = Notification::create(
        &state.db,
        payload.user_id,
        &payload.title,
        &payload.message,
        payload.kind.as_deref(),
        payload.link.as_deref(),
    )
    .await?;

    info!(notification_id = %notification.id, user_id = %notification.user_id, "notification created");
    Ok(Json(notification))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_notifications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let rows = Notification::list_for_user(&state.db, user.id, p.limit, p.offset).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    let notification = Notification::mark_read(&state.db, id, user.id)
        .await?
        .ok_or(AppError::NotFound("Notification"))?;
    Ok(Json(notification))
}
