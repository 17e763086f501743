use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Catalog entry patients pick from when describing a consultation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Symptom {
    pub async fn create(
        db: &PgPool,
        name: &str,
        category: Option<&str>,
        description: Option<&str>,
    ) -> sqlx::Result<Symptom> {
        sqlx::query_as::<_, Symptom>(
            r#"
            INSERT INTO symptoms (name, category, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, category, description
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(description)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> sqlx::Result<Vec<Symptom>> {
        sqlx::query_as::<_, Symptom>(
            r#"
            SELECT id, name, category, description
            FROM symptoms
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }
}
