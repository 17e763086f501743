use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Doctor profile, one per user. `is_verified` starts false and is only
/// flipped out of band.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialization: Option<String>,
    pub license_number: Option<String>,
    pub years_of_experience: i32,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub created_at: OffsetDateTime,
}

impl Doctor {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        specialization: Option<&str>,
        license_number: Option<&str>,
        years_of_experience: i32,
        bio: Option<&str>,
    ) -> sqlx::Result<Doctor> {
        sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (user_id, specialization, license_number, years_of_experience, bio)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, specialization, license_number, years_of_experience,
                      bio, is_verified, created_at
            "#,
        )
        .bind(user_id)
        .bind(specialization)
        .bind(license_number)
        .bind(years_of_experience)
        .bind(bio)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, user_id, specialization, license_number, years_of_experience,
                   bio, is_verified, created_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, user_id, specialization, license_number, years_of_experience,
                   bio, is_verified, created_at
            FROM doctors
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// List doctors, optionally narrowed to a specialization.
    pub async fn list(
        db: &PgPool,
        specialization: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, user_id, specialization, license_number, years_of_experience,
                   bio, is_verified, created_at
            FROM doctors
            WHERE $1::text IS NULL OR specialization = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(specialization)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }
}
