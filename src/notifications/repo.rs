use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored in-app notification. Rows are written and read here; nothing in
/// this service pushes them anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_read: bool,
    pub link: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Notification {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        message: &str,
        kind: Option<&str>,
        link: Option<&str>,
    ) -> sqlx::Result<Notification> {
        sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (user_id, title, message, kind, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, message, kind, is_read, link, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(message)
        .bind(kind)
        .bind(link)
        .fetch_one(db)
        .await
    }

    pub async fn list_for_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, user_id, title, message, kind, is_read, link, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    /// Marks one of the caller's own notifications as read. The ownership
    /// check is part of the WHERE clause so a foreign id reads as not found.
    pub async fn mark_read(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> sqlx::Result<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, message, kind, is_read, link, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }
}
