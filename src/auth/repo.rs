use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Find a user by email. Emails are matched exactly as stored.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, role, password_hash, avatar_url, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, role, password_hash, avatar_url, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already-hashed password. The UNIQUE
    /// constraint on email is the authoritative duplicate check; callers
    /// inspect the error for a unique violation.
    pub async fn create(
        db: &PgPool,
        email: &str,
        full_name: &str,
        role: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, full_name, role, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, full_name, role, password_hash, avatar_url, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(full_name)
        .bind(role)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}
