use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: Uuid,
    pub date: Date,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_wire_shape() {
        let req: CreateAppointmentRequest = serde_json::from_str(
            r#"{
                "doctor_id": "7f4df01e-59f7-44b3-8a64-a51fe9e4b3a3",
                "date": "2026-09-01",
                "time": "14:30",
                "type": "video"
            }"#,
        )
        .unwrap();
        assert_eq!(req.appointment_type, "video");
        assert_eq!(req.time, "14:30");
        assert!(req.location.is_none());
    }
}
