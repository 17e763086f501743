use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// A booked appointment between a patient and a doctor. `time` is the
/// clinic-local slot label the clients exchange ("14:30"); no calendar math
/// happens server-side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: Date,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub location: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = r#"id, patient_id, doctor_id, date, time, appointment_type, location,
    status, notes, created_at, updated_at"#;

impl Appointment {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &PgPool,
        patient_id: Uuid,
        doctor_id: Uuid,
        date: Date,
        time: &str,
        appointment_type: &str,
        location: Option<&str>,
        notes: Option<&str>,
    ) -> sqlx::Result<Appointment> {
        sqlx::query_as::<_, Appointment>(&format!(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, date, time, appointment_type, location, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(patient_id)
        .bind(doctor_id)
        .bind(date)
        .bind(time)
        .bind(appointment_type)
        .bind(location)
        .bind(notes)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM appointments
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
    ) -> sqlx::Result<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM appointments
            WHERE patient_id = $1
            ORDER BY date DESC, created_at DESC
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
    ) -> sqlx::Result<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM appointments
            WHERE doctor_id = $1
            ORDER BY date DESC, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(doctor_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        status: Option<&str>,
        notes: Option<&str>,
    ) -> sqlx::Result<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(&format!(
            r#"
            UPDATE appointments
            SET status = COALESCE($2, status),
                notes = COALESCE($3, notes),
                updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(status)
        .bind(notes)
        .fetch_optional(db)
        .await
    }
}
