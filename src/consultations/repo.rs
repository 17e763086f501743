use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A consultation request opened by a patient, optionally picked up by a
/// doctor. `status` and `priority` are free-form tags the clients agree on
/// (pending/assigned/completed/cancelled, urgent/high/medium/low).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub symptoms: Vec<String>,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub ai_recommendation: String,
    pub doctor_notes: String,
    pub suggested_specialty: Option<String>,
    pub follow_up_questions: Option<Vec<String>>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = r#"id, patient_id, doctor_id, symptoms, description, status, priority,
    ai_recommendation, doctor_notes, suggested_specialty, follow_up_questions,
    created_at, updated_at"#;

impl Consultation {
    pub async fn create(
        db: &PgPool,
        patient_id: Uuid,
        symptoms: &[String],
        description: &str,
        priority: &str,
    ) -> sqlx::Result<Consultation> {
        sqlx::query_as::<_, Consultation>(&format!(
            r#"
            INSERT INTO consultations (patient_id, symptoms, description, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(patient_id)
        .bind(symptoms)
        .bind(description)
        .bind(priority)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Consultation>> {
        sqlx::query_as::<_, Consultation>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM consultations
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_for_patient(
        db: &PgPool,
        patient_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Consultation>> {
        sqlx::query_as::<_, Consultation>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM consultations
            WHERE patient_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(patient_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn list_for_doctor(
        db: &PgPool,
        doctor_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Consultation>> {
        sqlx::query_as::<_, Consultation>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM consultations
            WHERE doctor_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(doctor_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    /// Partial update; absent fields keep their stored values. Bumps
    /// `updated_at` on every call.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        doctor_id: Option<Uuid>,
        status: Option<&str>,
        doctor_notes: Option<&str>,
    ) -> sqlx::Result<Option<Consultation>> {
        sqlx::query_as::<_, Consultation>(&format!(
            r#"
            UPDATE consultations
            SET doctor_id = COALESCE($2, doctor_id),
                status = COALESCE($3, status),
                doctor_notes = COALESCE($4, doctor_notes),
                updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(doctor_id)
        .bind(status)
        .bind(doctor_notes)
        .fetch_optional(db)
        .await
    }
}
