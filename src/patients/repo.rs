use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Patient profile, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Patient {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        date_of_birth: Option<Date>,
        gender: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> sqlx::Result<Patient> {
        sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (user_id, date_of_birth, gender, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, date_of_birth, gender, phone, address, created_at
            "#,
        )
        .bind(user_id)
        .bind(date_of_birth)
        .bind(gender)
        .bind(phone)
        .bind(address)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Patient>> {
        sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, user_id, date_of_birth, gender, phone, address, created_at
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<Patient>> {
        sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, user_id, date_of_birth, gender, phone, address, created_at
            FROM patients
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> sqlx::Result<Vec<Patient>> {
        sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, user_id, date_of_birth, gender, phone, address, created_at
            FROM patients
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }
}
